//! Core types for the bmi application.
//!
//! This crate holds everything that is independent of the terminal: the
//! measurement types, the BMI evaluator, the category bands, and the
//! messages exchanged between the input handler and the application state.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`measurement`]: Validated and optional measurement inputs
//! - [`evaluator`]: The BMI formula, rounding, and the `BmiResult` type
//! - [`category`]: The four BMI bands and their thresholds
//! - [`input`]: Parsing of free-form field text into optional numbers
//! - [`message`]: TUI event messages
//! - [`error`]: Error types for evaluation
//!
//! # Examples
//!
//! ```
//! use bmi_core::{Category, compute};
//!
//! let result = compute(Some(180.0), Some(75.0)).unwrap();
//! assert_eq!(result.value(), 23.15);
//! assert_eq!(result.category(), Category::Normal);
//!
//! // Absent input never produces a result
//! assert!(compute(None, Some(75.0)).is_err());
//! ```

pub mod category;
pub mod error;
pub mod evaluator;
pub mod input;
pub mod measurement;
pub mod message;

// Re-export primary types at crate root for convenience
pub use category::Category;
pub use error::{EvalError, Field, InvalidReason, Result};
pub use evaluator::{BmiResult, compute, round_to_hundredths};
pub use input::parse_field;
pub use measurement::{Measurement, MeasurementInput};
pub use message::Message;
