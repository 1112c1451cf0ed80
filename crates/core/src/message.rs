//! TUI message types for event handling.
//!
//! This module defines the message enum used for communication between
//! the TUI input handler and the application state.

use serde::{Deserialize, Serialize};

/// Messages that represent user actions in the TUI.
///
/// These messages are produced by the input handler and consumed by
/// the application state to update the form.
///
/// # Examples
///
/// ```
/// use bmi_core::Message;
///
/// let msg = Message::Input { ch: '7' };
/// assert!(matches!(msg, Message::Input { ch: '7' }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Move focus to the next form element.
    FocusNext,
    /// Move focus to the previous form element.
    FocusPrev,
    /// Type a character into the focused field.
    Input {
        /// The character that was typed.
        ch: char,
    },
    /// Delete the last character of the focused field.
    Backspace,
    /// Calculate the BMI from the current field contents.
    Submit,
    /// Escape: dismiss help or reset the form (contextual).
    Escape,
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,
    /// Mouse click at coordinates (column, row).
    ClickAt {
        /// Column (x coordinate) of the click.
        column: u16,
        /// Row (y coordinate) of the click.
        row: u16,
    },

    // --- Settings messages ---
    /// Open the settings panel.
    OpenSettings,
    /// Close the settings panel.
    CloseSettings,
    /// Navigate within the settings list.
    SettingsNavigate {
        /// Direction to navigate (positive = down, negative = up).
        delta: i32,
    },
    /// Toggle or start editing the selected setting.
    SettingsEdit,
    /// Confirm the current edit.
    SettingsConfirm,
    /// Cancel the current edit.
    SettingsCancel,
    /// Save settings to file.
    SettingsSave,
    /// Input a character while editing.
    SettingsInput {
        /// The character that was input.
        ch: char,
    },
    /// Delete the last character while editing.
    SettingsBackspace,
}

impl Message {
    /// Returns `true` if this message should terminate the application.
    ///
    /// # Examples
    ///
    /// ```
    /// use bmi_core::Message;
    ///
    /// assert!(Message::Quit.is_terminating());
    /// assert!(!Message::Escape.is_terminating());
    /// ```
    #[must_use]
    pub fn is_terminating(&self) -> bool {
        matches!(self, Self::Quit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_serialization_uses_snake_case() {
        let json = serde_json::to_string(&Message::FocusNext).unwrap();
        assert_eq!(json, r#""focus_next""#);

        let json = serde_json::to_string(&Message::Input { ch: '5' }).unwrap();
        assert_eq!(json, r#"{"input":{"ch":"5"}}"#);
    }

    #[test]
    fn click_roundtrip() {
        let msg = Message::ClickAt { column: 12, row: 4 };
        let json = serde_json::to_string(&msg).unwrap();
        let parsed: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(msg, parsed);
    }

    #[test]
    fn only_quit_terminates() {
        assert!(Message::Quit.is_terminating());
        assert!(!Message::Submit.is_terminating());
        assert!(!Message::CloseSettings.is_terminating());
    }
}
