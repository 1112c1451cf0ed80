//! Centralized layout measurements for the TUI.
//!
//! The form, message line, and result card are stacked in a centered
//! column. [`form_layout`] computes their rectangles once, so rendering and
//! mouse hit-testing always agree.

use ratatui::layout::Rect;

/// Height of the header bar in rows.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the status bar in rows.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Width of the centered column holding the form and the result card.
pub const PANEL_WIDTH: u16 = 36;

/// Height of the form panel: borders, two fields, a spacer, the button.
pub const FORM_HEIGHT: u16 = 6;

/// Height of the error message line below the form.
pub const MESSAGE_HEIGHT: u16 = 1;

/// Height of the result card: borders plus up to four content rows.
pub const RESULT_HEIGHT: u16 = 6;

/// Width of the field labels ("Height in cm" plus padding).
pub const LABEL_WIDTH: u16 = 14;

/// Text of the submit button.
pub const BUTTON_LABEL: &str = "[ Calculate BMI ]";

/// Minimum terminal height for useful rendering (form, message, result,
/// status bar).
pub const MIN_HEIGHT: u16 = FORM_HEIGHT + MESSAGE_HEIGHT + RESULT_HEIGHT + STATUS_BAR_HEIGHT;

/// Minimum terminal height for rendering with header.
///
/// Between `MIN_HEIGHT` and this value the header is hidden to reclaim
/// its rows.
pub const MIN_HEIGHT_WITH_HEADER: u16 = MIN_HEIGHT + HEADER_HEIGHT;

/// Minimum terminal width for useful rendering.
pub const MIN_WIDTH: u16 = 40;

/// Rectangles of the form elements within the content area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormLayout {
    /// The bordered form panel.
    pub form: Rect,
    /// The height input (brackets included).
    pub height_field: Rect,
    /// The weight input (brackets included).
    pub weight_field: Rect,
    /// The submit button.
    pub button: Rect,
    /// The error message line, spanning the full area width.
    pub message: Rect,
    /// The result card.
    pub result: Rect,
}

/// Computes the form layout for a content area.
///
/// The column is horizontally centered and clamped to the area; elements
/// that do not fit vertically get a zero height.
///
/// # Examples
///
/// ```
/// use ratatui::layout::Rect;
/// use bmi_tui::layout::{FORM_HEIGHT, PANEL_WIDTH, form_layout};
///
/// let layout = form_layout(Rect::new(0, 3, 80, 20));
/// assert_eq!(layout.form, Rect::new(22, 3, PANEL_WIDTH, FORM_HEIGHT));
/// assert_eq!(layout.height_field.y, 4);
/// ```
#[must_use]
pub fn form_layout(area: Rect) -> FormLayout {
    let width = PANEL_WIDTH.min(area.width);
    let x = area.x + (area.width - width) / 2;
    let bottom = area.bottom();

    // Stack rows top to bottom, clipping at the area bottom.
    let mut y = area.y;
    let mut take = |height: u16| {
        let row = Rect::new(x, y.min(bottom), width, height.min(bottom.saturating_sub(y)));
        y = y.saturating_add(height);
        row
    };
    let form = take(FORM_HEIGHT);
    // Error messages may be wider than the column.
    let message = Rect {
        x: area.x,
        width: area.width,
        ..take(MESSAGE_HEIGHT)
    };
    let result = take(RESULT_HEIGHT);

    // Inside the form border: label column, then the bracketed input.
    let inner_x = form.x + 1;
    let inner_width = form.width.saturating_sub(2);
    let field_x = inner_x + 1 + LABEL_WIDTH;
    let field_width = inner_width.saturating_sub(LABEL_WIDTH + 2);
    let field_row = |offset: u16| {
        if form.height > offset + 1 {
            Rect::new(field_x, form.y + 1 + offset, field_width, 1)
        } else {
            Rect::default()
        }
    };

    let button_width = (BUTTON_LABEL.len() as u16).min(inner_width);
    let button = if form.height > 4 {
        Rect::new(
            inner_x + (inner_width - button_width) / 2,
            form.y + 4,
            button_width,
            1,
        )
    } else {
        Rect::default()
    };

    FormLayout {
        form,
        height_field: field_row(0),
        weight_field: field_row(1),
        button,
        message,
        result,
    }
}
