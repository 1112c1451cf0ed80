//! Error types for BMI evaluation.
//!
//! Every way a calculation request can fail is represented here, so callers
//! never have to inspect a NaN or infinite value.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the two measurement fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Body height, in centimeters.
    Height,
    /// Body weight, in kilograms.
    Weight,
}

impl Field {
    /// Returns the unit symbol the field is expressed in.
    ///
    /// # Examples
    ///
    /// ```
    /// use bmi_core::Field;
    ///
    /// assert_eq!(Field::Height.unit(), "cm");
    /// assert_eq!(Field::Weight.unit(), "kg");
    /// ```
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Height => "cm",
            Self::Weight => "kg",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Height => f.write_str("height"),
            Self::Weight => f.write_str("weight"),
        }
    }
}

/// Why a present value was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidReason {
    /// The text could not be parsed as a number.
    #[error("'{0}' is not a number")]
    NotANumber(String),

    /// The value is zero or negative.
    #[error("{0} must be greater than zero")]
    NotPositive(f64),

    /// The value is NaN or infinite.
    #[error("value must be a finite number")]
    NotFinite,
}

/// Errors that can occur while evaluating a measurement.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// A required field was left empty.
    #[error("{field} is required")]
    MissingInput {
        /// The field that was absent.
        field: Field,
    },

    /// A field held a value that cannot describe a body.
    #[error("invalid {field}: {reason}")]
    InvalidInput {
        /// The offending field.
        field: Field,
        /// What was wrong with the value.
        reason: InvalidReason,
    },

    /// Both inputs are valid but the quotient is not a finite number.
    #[error("BMI cannot be represented for height {height_cm} cm and weight {weight_kg} kg")]
    Unrepresentable {
        /// The height that was supplied.
        height_cm: f64,
        /// The weight that was supplied.
        weight_kg: f64,
    },
}

impl EvalError {
    /// Returns the field this error is attributed to, if any.
    #[must_use]
    pub fn field(&self) -> Option<Field> {
        match self {
            Self::MissingInput { field } | Self::InvalidInput { field, .. } => Some(*field),
            Self::Unrepresentable { .. } => None,
        }
    }

    /// Returns `true` if the error only signals absent input.
    #[must_use]
    pub fn is_missing_input(&self) -> bool {
        matches!(self, Self::MissingInput { .. })
    }
}

/// A specialized Result type for evaluation operations.
pub type Result<T> = std::result::Result<T, EvalError>;
