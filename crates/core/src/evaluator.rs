//! The BMI evaluator.
//!
//! BMI is weight in kilograms divided by the square of height in meters.
//! The raw quotient is rounded to two decimal places (half away from zero,
//! applied to the binary value) and then classified into a [`Category`].

use std::fmt;

use serde::Serialize;

use crate::category::Category;
use crate::error::Result;
use crate::measurement::MeasurementInput;

/// Rounds a value to two decimal places, half away from zero.
///
/// The scaling is done on the binary value, so a decimal literal such as
/// `1.005` (stored slightly below the tie) rounds down while an exact tie
/// such as `18.125` rounds up.
///
/// # Examples
///
/// ```
/// use bmi_core::round_to_hundredths;
///
/// assert_eq!(round_to_hundredths(23.148148), 23.15);
/// assert_eq!(round_to_hundredths(18.125), 18.13);
/// assert_eq!(round_to_hundredths(-18.125), -18.13);
/// ```
#[must_use]
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// The outcome of a successful calculation.
///
/// The category is always derived from the rounded value, so the two can
/// never disagree.
///
/// # Examples
///
/// ```
/// use bmi_core::{BmiResult, Category};
///
/// let result = BmiResult::from_raw(27.681660899653977);
/// assert_eq!(result.value(), 27.68);
/// assert_eq!(result.category(), Category::Overweight);
/// assert_eq!(result.to_string(), "27.68");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BmiResult {
    value: f64,
    category: Category,
}

impl BmiResult {
    /// Rounds a raw BMI quotient and classifies it.
    #[must_use]
    pub fn from_raw(raw: f64) -> Self {
        let value = round_to_hundredths(raw);
        Self {
            value,
            category: Category::from_bmi(value),
        }
    }

    /// Returns the BMI rounded to two decimal places.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns the category of the rounded value.
    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }
}

impl fmt::Display for BmiResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.value)
    }
}

/// Computes the BMI for an optional height (cm) and weight (kg).
///
/// This is the single entry point used by the form: absence, invalid values
/// and unrepresentable results all come back as errors, never as a NaN or
/// infinite value.
///
/// # Errors
///
/// - [`EvalError::MissingInput`](crate::EvalError::MissingInput) if either
///   value is `None`
/// - [`EvalError::InvalidInput`](crate::EvalError::InvalidInput) if either
///   value is zero, negative or not finite
/// - [`EvalError::Unrepresentable`](crate::EvalError::Unrepresentable) if the
///   quotient is not finite
///
/// # Examples
///
/// ```
/// use bmi_core::{Category, compute};
///
/// let result = compute(Some(165.0), Some(50.37)).unwrap();
/// assert_eq!(result.value(), 18.5);
/// assert_eq!(result.category(), Category::Normal);
/// ```
pub fn compute(height_cm: Option<f64>, weight_kg: Option<f64>) -> Result<BmiResult> {
    MeasurementInput::new(height_cm, weight_kg)
        .validate()?
        .evaluate()
}
