//! Optional values pre-filled into the form.
//!
//! These are starting values for the input fields, not stored measurements:
//! the form never writes back to them on its own.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Largest value accepted for either pre-fill field.
pub const MAX_PREFILL: f64 = 1000.0;

/// Returns `true` if `value` may be used as a pre-fill value.
///
/// # Examples
///
/// ```
/// use bmi_config::form::is_valid_prefill;
///
/// assert!(is_valid_prefill(180.0));
/// assert!(!is_valid_prefill(0.0));
/// assert!(!is_valid_prefill(f64::NAN));
/// assert!(!is_valid_prefill(1500.0));
/// ```
#[must_use]
pub fn is_valid_prefill(value: f64) -> bool {
    value.is_finite() && value > 0.0 && value <= MAX_PREFILL
}

/// Form pre-fill configuration.
///
/// # Examples
///
/// ```
/// use bmi_config::FormDefaults;
///
/// let defaults = FormDefaults::new(Some(180.0), None);
/// assert!(defaults.validate().is_ok());
/// assert!(!defaults.is_empty());
///
/// let defaults = FormDefaults::new(Some(-5.0), None);
/// assert!(defaults.validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FormDefaults {
    /// Height in centimeters shown when the form opens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,

    /// Weight in kilograms shown when the form opens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
}

impl FormDefaults {
    /// Creates pre-fill values for both fields.
    #[must_use]
    pub fn new(height_cm: Option<f64>, weight_kg: Option<f64>) -> Self {
        Self {
            height_cm,
            weight_kg,
        }
    }

    /// Returns `true` if neither field is pre-filled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.height_cm.is_none() && self.weight_kg.is_none()
    }

    /// Validates the configured values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidFormDefault`] if a present value is not
    /// a finite number in `(0, MAX_PREFILL]`.
    pub fn validate(&self) -> Result<()> {
        check("height_cm", self.height_cm)?;
        check("weight_kg", self.weight_kg)
    }
}

fn check(field: &'static str, value: Option<f64>) -> Result<()> {
    match value {
        Some(value) if !is_valid_prefill(value) => Err(ConfigError::InvalidFormDefault {
            field,
            value,
            max: MAX_PREFILL,
        }),
        _ => Ok(()),
    }
}
