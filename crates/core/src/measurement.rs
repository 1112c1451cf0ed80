//! Measurement inputs.
//!
//! [`MeasurementInput`] models what a form holds: each field is either
//! present or absent. [`Measurement`] is the validated form of it, and is
//! the only thing the evaluator accepts.

use serde::{Deserialize, Serialize};

use crate::error::{EvalError, Field, InvalidReason, Result};
use crate::evaluator::BmiResult;
use crate::input::parse_field;

/// A validated height/weight pair.
///
/// Both values are finite and strictly positive.
///
/// # Examples
///
/// ```
/// use bmi_core::Measurement;
///
/// let measurement = Measurement::new(180.0, 75.0).unwrap();
/// assert_eq!(measurement.height_cm(), 180.0);
///
/// assert!(Measurement::new(0.0, 75.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Measurement {
    height_cm: f64,
    weight_kg: f64,
}

impl Measurement {
    /// Creates a measurement, rejecting non-positive or non-finite values.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::InvalidInput`] naming the first offending field
    /// (height is checked before weight).
    pub fn new(height_cm: f64, weight_kg: f64) -> Result<Self> {
        check_value(Field::Height, height_cm)?;
        check_value(Field::Weight, weight_kg)?;
        Ok(Self {
            height_cm,
            weight_kg,
        })
    }

    /// Returns the height in centimeters.
    #[must_use]
    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }

    /// Returns the height in meters.
    #[must_use]
    pub fn height_m(&self) -> f64 {
        self.height_cm / 100.0
    }

    /// Returns the weight in kilograms.
    #[must_use]
    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// Computes the BMI of this measurement.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::Unrepresentable`] if the quotient (or its
    /// rounding) is not a finite value.
    pub fn evaluate(&self) -> Result<BmiResult> {
        let height_m = self.height_m();
        let result = BmiResult::from_raw(self.weight_kg / (height_m * height_m));
        if !result.value().is_finite() {
            return Err(EvalError::Unrepresentable {
                height_cm: self.height_cm,
                weight_kg: self.weight_kg,
            });
        }
        Ok(result)
    }
}

/// Checks that a present value can describe a body dimension.
fn check_value(field: Field, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(EvalError::InvalidInput {
            field,
            reason: InvalidReason::NotFinite,
        });
    }
    if value <= 0.0 {
        return Err(EvalError::InvalidInput {
            field,
            reason: InvalidReason::NotPositive(value),
        });
    }
    Ok(())
}

/// A height/weight pair where either value may be absent.
///
/// # Examples
///
/// ```
/// use bmi_core::{EvalError, Field, MeasurementInput};
///
/// let input = MeasurementInput::new(Some(180.0), None);
/// assert_eq!(
///     input.validate(),
///     Err(EvalError::MissingInput { field: Field::Weight })
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MeasurementInput {
    /// Height in centimeters, if entered.
    #[serde(default)]
    pub height_cm: Option<f64>,
    /// Weight in kilograms, if entered.
    #[serde(default)]
    pub weight_kg: Option<f64>,
}

impl MeasurementInput {
    /// Creates an input from two optional values.
    #[must_use]
    pub fn new(height_cm: Option<f64>, weight_kg: Option<f64>) -> Self {
        Self {
            height_cm,
            weight_kg,
        }
    }

    /// Parses an input from raw field text.
    ///
    /// Blank text is treated as absent.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::InvalidInput`] if non-blank text is not a number.
    ///
    /// # Examples
    ///
    /// ```
    /// use bmi_core::MeasurementInput;
    ///
    /// let input = MeasurementInput::parse("180", "").unwrap();
    /// assert_eq!(input.height_cm, Some(180.0));
    /// assert_eq!(input.weight_kg, None);
    /// ```
    pub fn parse(height_text: &str, weight_text: &str) -> Result<Self> {
        Ok(Self {
            height_cm: parse_field(Field::Height, height_text)?,
            weight_kg: parse_field(Field::Weight, weight_text)?,
        })
    }

    /// Returns `true` if both values are present.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.height_cm.is_some() && self.weight_kg.is_some()
    }

    /// Converts absence into [`EvalError::MissingInput`] and validates the
    /// present values.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::MissingInput`] for the first absent field, or
    /// [`EvalError::InvalidInput`] for the first invalid one.
    pub fn validate(&self) -> Result<Measurement> {
        let height_cm = self.height_cm.ok_or(EvalError::MissingInput {
            field: Field::Height,
        })?;
        let weight_kg = self.weight_kg.ok_or(EvalError::MissingInput {
            field: Field::Weight,
        })?;
        Measurement::new(height_cm, weight_kg)
    }
}
