//! Configuration management for the bmi application.
//!
//! This crate handles loading, validating, and persisting configuration
//! from files, falling back to built-in defaults.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`display`]: Result card display options
//! - [`form`]: Optional values pre-filled into the form
//! - [`persistence`]: Config file reading and writing
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! The first file found wins:
//!
//! 1. Local config (`./bmi.json5` or `./bmi.json`)
//! 2. User config (`~/.config/bmi/config.json5` or `~/.config/bmi/config.json`)
//! 3. Built-in defaults
//!
//! # File Format
//!
//! ```json5
//! {
//!   display: { show_icon: true, show_scale: false },
//!   // Values shown in the form at startup
//!   form: { height_cm: 180, weight_kg: 75 },
//! }
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use bmi_config::Config;
//!
//! # async fn example() -> bmi_config::Result<()> {
//! let config = Config::load().await?;
//!
//! if let Some(height) = config.form.height_cm {
//!     println!("Pre-filling height with {height} cm");
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod form;
pub mod persistence;

// Re-export primary types at crate root for convenience
pub use config::Config;
pub use display::DisplayConfig;
pub use error::{ConfigError, Result};
pub use form::FormDefaults;
