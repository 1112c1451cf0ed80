//! Event handling and key mappings.
//!
//! This module provides event polling and conversion from terminal events
//! to application messages.

use std::time::Duration;

use bmi_core::Message;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEventKind};

/// Default poll timeout for events.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Polls for a terminal event with the default timeout.
///
/// Returns `Some(Event)` if an event is available within the timeout,
/// or `None` if the timeout expires without an event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Converts an event (keyboard or mouse) to an application message.
///
/// Returns `Some(Message)` if the event maps to an action,
/// or `None` if the event is not handled.
#[must_use]
pub fn event_to_message(event: &Event) -> Option<Message> {
    match event {
        Event::Key(key) => key_to_message(*key),
        Event::Mouse(mouse) => mouse_to_message(mouse),
        _ => None,
    }
}

/// Converts a mouse event to an application message.
///
/// Only left-click press events are handled.
#[must_use]
fn mouse_to_message(mouse: &crossterm::event::MouseEvent) -> Option<Message> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Message::ClickAt {
            column: mouse.column,
            row: mouse.row,
        }),
        _ => None,
    }
}

/// Returns `true` for characters a numeric field accepts.
#[must_use]
pub fn is_numeric_char(ch: char) -> bool {
    ch.is_ascii_digit() || ch == '.' || ch == ','
}

/// Converts a terminal key event to an application message.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | `Esc` | Escape (dismiss help or reset the form) |
/// | `Tab` / `Down` | Next field |
/// | `Shift+Tab` / `Up` | Previous field |
/// | `0`-`9`, `.`, `,` | Type into the focused field |
/// | `Backspace` | Delete last character |
/// | `Enter` | Calculate BMI |
/// | `?` | Toggle help |
/// | `Shift+S` | Open settings |
#[must_use]
pub fn key_to_message(key: KeyEvent) -> Option<Message> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Message::Quit);
    }

    if key.modifiers.contains(KeyModifiers::SHIFT) && key.code == KeyCode::Char('S') {
        return Some(Message::OpenSettings);
    }

    match key.code {
        KeyCode::Esc => Some(Message::Escape),

        KeyCode::Tab | KeyCode::Down => Some(Message::FocusNext),
        KeyCode::BackTab | KeyCode::Up => Some(Message::FocusPrev),

        KeyCode::Enter => Some(Message::Submit),
        KeyCode::Backspace => Some(Message::Backspace),

        KeyCode::Char('?') => Some(Message::ToggleHelp),
        KeyCode::Char(ch) if is_numeric_char(ch) => Some(Message::Input { ch }),

        _ => None,
    }
}

/// Converts a key event to a settings-specific message.
///
/// This function is used when the settings panel is open.
///
/// # Key Bindings (Settings Mode)
///
/// | Key | Action |
/// |-----|--------|
/// | `Up` / `Down` | Navigate |
/// | `Enter` / `Space` | Toggle or edit |
/// | `s` | Save to the user config file |
/// | `Esc` | Close (navigation) or cancel (editing) |
/// | `Backspace` | Backspace (in edit mode) |
/// | `0`-`9`, `.`, `,` | Input (in edit mode) |
#[must_use]
pub fn key_to_settings_message(key: KeyEvent, is_editing: bool) -> Option<Message> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Message::Quit);
    }

    if is_editing {
        match key.code {
            KeyCode::Enter => Some(Message::SettingsConfirm),
            KeyCode::Esc => Some(Message::SettingsCancel),
            KeyCode::Backspace => Some(Message::SettingsBackspace),
            KeyCode::Char(ch) if is_numeric_char(ch) => Some(Message::SettingsInput { ch }),
            _ => None,
        }
    } else {
        match key.code {
            KeyCode::Esc => Some(Message::CloseSettings),
            KeyCode::Up => Some(Message::SettingsNavigate { delta: -1 }),
            KeyCode::Down | KeyCode::Tab => Some(Message::SettingsNavigate { delta: 1 }),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Message::SettingsEdit),
            KeyCode::Char('s') => Some(Message::SettingsSave),
            _ => None,
        }
    }
}
