//! Widget components for the bmi TUI.
//!
//! This module provides reusable rendering functions for the calculator UI,
//! organized into focused submodules for each visual component.
//!
//! # Overview
//!
//! Each widget is a pure function that renders state to a buffer. This
//! enables easy testing and composition.
//!
//! # Modules
//!
//! - [`form`]: Renders the measurement form and the error line
//! - [`result_card`]: Renders the result card with color coding based on category
//! - [`status_bar`]: Renders the footer with keybinding hints
//! - [`help`]: Renders the keybinding overlay
//! - [`settings`]: Renders the settings panel
//!
//! # Color Coding
//!
//! The result card is color-coded based on its [`Category`](bmi_core::Category):
//!
//! | Category | Color |
//! |----------|-------|
//! | `Underweight` | Blue (`Color::Blue`) |
//! | `Normal` | Green (`Color::Green`) |
//! | `Overweight` | Yellow (`Color::Yellow`) |
//! | `Obese` | Red (`Color::Red`) |
//!
//! # Example
//!
//! ```
//! use ratatui::buffer::Buffer;
//! use ratatui::layout::Rect;
//! use bmi_config::DisplayConfig;
//! use bmi_core::compute;
//! use bmi_tui::widgets;
//!
//! let result = compute(Some(170.0), Some(80.0)).unwrap();
//!
//! let area = Rect::new(0, 0, 36, 6);
//! let mut buf = Buffer::empty(area);
//!
//! widgets::render_result_card(&result, &DisplayConfig::default(), area, &mut buf);
//! ```

pub mod form;
pub mod help;
pub mod result_card;
pub mod settings;
pub mod status_bar;

// Re-export primary rendering functions for convenience
pub use form::{render_form, render_message};
pub use help::render_help_overlay;
pub use result_card::{category_color, category_icon, render_result_card};
pub use settings::render_settings_panel;
pub use status_bar::render_status_bar;
