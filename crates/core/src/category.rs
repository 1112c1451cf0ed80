//! BMI category bands.
//!
//! The four bands partition the real line with half-open intervals whose
//! lower bound is inclusive:
//!
//! | Band | Range |
//! |------|-------|
//! | `Underweight` | `value < 18.5` |
//! | `Normal` | `18.5 <= value < 24.9` |
//! | `Overweight` | `24.9 <= value < 29.9` |
//! | `Obese` | `value >= 29.9` |

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lower bound of the normal weight band.
pub const NORMAL_THRESHOLD: f64 = 18.5;

/// Lower bound of the overweight band.
pub const OVERWEIGHT_THRESHOLD: f64 = 24.9;

/// Lower bound of the obese band.
pub const OBESE_THRESHOLD: f64 = 29.9;

/// The classification of a BMI value.
///
/// Variants are declared in ascending order, so the derived `Ord` follows
/// the BMI scale.
///
/// # Examples
///
/// ```
/// use bmi_core::Category;
///
/// assert_eq!(Category::from_bmi(17.0), Category::Underweight);
/// assert_eq!(Category::from_bmi(18.5), Category::Normal);
/// assert!(Category::Normal < Category::Obese);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// BMI below 18.5.
    Underweight,
    /// BMI from 18.5 up to (excluding) 24.9.
    Normal,
    /// BMI from 24.9 up to (excluding) 29.9.
    Overweight,
    /// BMI of 29.9 or more.
    Obese,
}

impl Category {
    /// Classifies a BMI value.
    ///
    /// Comparisons are strictly-less-than against ascending thresholds, so
    /// every finite value lands in exactly one band.
    #[must_use]
    pub fn from_bmi(value: f64) -> Self {
        if value < NORMAL_THRESHOLD {
            Self::Underweight
        } else if value < OVERWEIGHT_THRESHOLD {
            Self::Normal
        } else if value < OBESE_THRESHOLD {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// Returns the human-readable status label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal weight",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }

    /// Returns a short label suitable for compact scales.
    #[must_use]
    pub const fn short_label(self) -> &'static str {
        match self {
            Self::Underweight => "Under",
            Self::Normal => "Normal",
            Self::Overweight => "Over",
            Self::Obese => "Obese",
        }
    }

    /// Returns the inclusive lower bound of the band, or `None` for the
    /// lowest band.
    #[must_use]
    pub const fn lower_bound(self) -> Option<f64> {
        match self {
            Self::Underweight => None,
            Self::Normal => Some(NORMAL_THRESHOLD),
            Self::Overweight => Some(OVERWEIGHT_THRESHOLD),
            Self::Obese => Some(OBESE_THRESHOLD),
        }
    }

    /// Returns all categories in ascending order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[
            Self::Underweight,
            Self::Normal,
            Self::Overweight,
            Self::Obese,
        ]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
