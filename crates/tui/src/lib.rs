//! Terminal UI for the bmi calculator.
//!
//! This crate provides a Ratatui-based form that collects height and weight,
//! evaluates them with [`bmi_core`], and shows the result card.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`app`]: Main application struct and run loop
//! - [`state`]: Form state and the outcome of the latest calculation
//! - [`settings_state`]: Settings panel state management
//! - [`layout`]: Shared layout measurements for rendering and hit-testing
//! - [`widgets`]: Rendering functions
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//! - [`event`]: Event handling and key mappings
//!
//! # Example
//!
//! ```no_run
//! use bmi_config::Config;
//! use bmi_tui::{App, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let mut terminal = terminal::setup_terminal()?;
//!
//!     let mut app = App::with_config(Config::load().await?);
//!     let result = app.run(&mut terminal).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod app;
pub mod event;
pub mod layout;
pub mod settings_state;
pub mod state;
pub mod terminal;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types at crate root for convenience
pub use app::App;
pub use state::{AppState, Focus};
