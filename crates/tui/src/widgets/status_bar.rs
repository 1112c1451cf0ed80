//! Status bar rendering widget.
//!
//! This module provides the footer line with keybinding hints.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Keybinding hints shown in the status bar, as `(key, action)` pairs.
const HINTS: &[(&str, &str)] = &[
    ("Tab", "Next"),
    ("Enter", "Calculate"),
    ("Esc", "Clear"),
    ("?", "Help"),
    ("Shift+S", "Settings"),
    ("Ctrl+C", "Quit"),
];

/// Renders the status bar with keybinding hints.
///
/// Hints that do not fit the width are cut off at the right edge.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use bmi_tui::widgets::render_status_bar;
///
/// let area = Rect::new(0, 0, 80, 1);
/// let mut buf = Buffer::empty(area);
///
/// render_status_bar(area, &mut buf);
/// ```
pub fn render_status_bar(area: Rect, buf: &mut Buffer) {
    let key_style = Style::default().fg(Color::Yellow);
    let text_style = Style::default().fg(Color::DarkGray);

    let mut spans = vec![Span::raw(" ")];
    for (key, action) in HINTS {
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(format!(" {action}  "), text_style));
    }

    Paragraph::new(Line::from(spans)).render(area, buf);
}
