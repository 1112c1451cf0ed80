//! Parsing of free-form field text.
//!
//! Form fields hold text; this module turns that text into an explicit
//! optional number so that "left empty" and "typed something" are distinct
//! states before any calculation happens.

use crate::error::{EvalError, Field, InvalidReason, Result};

/// Parses the text of a single field.
///
/// Surrounding whitespace is ignored. Blank text yields `Ok(None)`. A comma
/// is accepted as decimal separator.
///
/// Range checks are not performed here; see
/// [`Measurement::new`](crate::Measurement::new).
///
/// # Errors
///
/// Returns [`EvalError::InvalidInput`] with [`InvalidReason::NotANumber`] if
/// the text is not blank and does not parse as a number.
///
/// # Examples
///
/// ```
/// use bmi_core::{Field, parse_field};
///
/// assert_eq!(parse_field(Field::Weight, "50,37").unwrap(), Some(50.37));
/// assert_eq!(parse_field(Field::Weight, " ").unwrap(), None);
/// assert!(parse_field(Field::Weight, "heavy").is_err());
/// ```
pub fn parse_field(field: Field, text: &str) -> Result<Option<f64>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    trimmed
        .replace(',', ".")
        .parse::<f64>()
        .map(Some)
        .map_err(|_| EvalError::InvalidInput {
            field,
            reason: InvalidReason::NotANumber(trimmed.to_string()),
        })
}
