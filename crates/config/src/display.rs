//! Result card display options.

use serde::{Deserialize, Serialize};

/// Controls the optional parts of the result card.
///
/// # Examples
///
/// ```
/// use bmi_config::DisplayConfig;
///
/// let display = DisplayConfig::default();
/// assert!(display.show_icon);
/// assert!(display.show_scale);
///
/// let plain = DisplayConfig::minimal();
/// assert!(!plain.show_icon && !plain.show_scale);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Whether to show the category icon below the status line.
    #[serde(default = "default_true")]
    pub show_icon: bool,

    /// Whether to show the four-band scale with the current band highlighted.
    #[serde(default = "default_true")]
    pub show_scale: bool,
}

fn default_true() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_icon: true,
            show_scale: true,
        }
    }
}

impl DisplayConfig {
    /// Returns a configuration showing only the value and status lines.
    #[must_use]
    pub fn minimal() -> Self {
        Self {
            show_icon: false,
            show_scale: false,
        }
    }

    /// Returns the number of content rows the result card needs.
    ///
    /// # Examples
    ///
    /// ```
    /// use bmi_config::DisplayConfig;
    ///
    /// assert_eq!(DisplayConfig::default().content_rows(), 4);
    /// assert_eq!(DisplayConfig::minimal().content_rows(), 2);
    /// ```
    #[must_use]
    pub fn content_rows(&self) -> u16 {
        2 + u16::from(self.show_icon) + u16::from(self.show_scale)
    }
}
