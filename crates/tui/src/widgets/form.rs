//! Measurement form widget.
//!
//! Renders the bordered form panel with the two numeric inputs, the submit
//! button, and the error line beneath it.

use bmi_core::EvalError;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::{
    layout::{BUTTON_LABEL, FormLayout},
    state::{AppState, Focus, InputField},
};

/// Label of the height input.
pub const HEIGHT_LABEL: &str = "Height in cm";

/// Label of the weight input.
pub const WEIGHT_LABEL: &str = "Weight in kg";

/// Renders the form panel.
///
/// The focused input shows a trailing `_` cursor; the focused button is
/// drawn reversed.
///
/// # Layout
///
/// ```text
/// ╭ BMI Calculator ──────────────────╮
/// │ Height in cm  [180_            ] │
/// │ Weight in kg  [75              ] │
/// │                                  │
/// │        [ Calculate BMI ]         │
/// ╰──────────────────────────────────╯
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use bmi_tui::AppState;
/// use bmi_tui::layout::form_layout;
/// use bmi_tui::widgets::render_form;
///
/// let area = Rect::new(0, 0, 80, 20);
/// let mut buf = Buffer::empty(area);
///
/// render_form(&AppState::new(), &form_layout(area), &mut buf);
/// ```
pub fn render_form(state: &AppState, layout: &FormLayout, buf: &mut Buffer) {
    let block = Block::default()
        .title(Span::styled(
            " BMI Calculator ",
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(layout.form);
    block.render(layout.form, buf);

    let label_style = Style::default().fg(Color::Gray);
    for (label, field_area) in [
        (HEIGHT_LABEL, layout.height_field),
        (WEIGHT_LABEL, layout.weight_field),
    ] {
        if field_area.height > 0 && inner.width > 1 {
            buf.set_stringn(
                inner.x + 1,
                field_area.y,
                label,
                usize::from(inner.width - 1),
                label_style,
            );
        }
    }

    render_input(
        &state.height,
        state.focus == Focus::Height,
        layout.height_field,
        buf,
    );
    render_input(
        &state.weight,
        state.focus == Focus::Weight,
        layout.weight_field,
        buf,
    );
    render_button(state.focus == Focus::Submit, layout.button, buf);
}

/// Renders a bracketed input field, padding the text to the field width.
fn render_input(field: &InputField, focused: bool, area: Rect, buf: &mut Buffer) {
    if area.height == 0 || area.width < 2 {
        return;
    }

    let cursor = if focused { "_" } else { "" };
    let content = format!(
        "[{:<width$}]",
        format!("{}{cursor}", field.text()),
        width = usize::from(area.width - 2)
    );
    let style = if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    buf.set_stringn(area.x, area.y, content, usize::from(area.width), style);
}

/// Renders the submit button.
fn render_button(focused: bool, area: Rect, buf: &mut Buffer) {
    if area.height == 0 {
        return;
    }

    let style = if focused {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().fg(Color::Green)
    };

    buf.set_stringn(
        area.x,
        area.y,
        BUTTON_LABEL,
        usize::from(area.width),
        style,
    );
}

/// Renders the error from the last rejected submission, if any.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use bmi_core::{EvalError, Field};
/// use bmi_tui::widgets::render_message;
///
/// let area = Rect::new(0, 0, 36, 1);
/// let mut buf = Buffer::empty(area);
/// let error = EvalError::MissingInput { field: Field::Weight };
///
/// render_message(Some(&error), area, &mut buf);
/// ```
pub fn render_message(error: Option<&EvalError>, area: Rect, buf: &mut Buffer) {
    let Some(error) = error else {
        return;
    };

    let message = Paragraph::new(Line::from(Span::styled(
        error.to_string(),
        Style::default().fg(Color::Red),
    )))
    .alignment(Alignment::Center);

    message.render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::form_layout;
    use crate::test_utils::buffer_to_string;
    use bmi_core::Field;

    fn render(state: &AppState) -> String {
        let area = Rect::new(0, 0, 36, 6);
        let mut buf = Buffer::empty(area);
        render_form(state, &form_layout(area), &mut buf);
        buffer_to_string(&buf)
    }

    #[test]
    fn focused_field_shows_cursor() {
        let mut state = AppState::with_prefill(Some(180.0), Some(75.0));
        let content = render(&state);
        assert!(content.contains("[180_"));
        assert!(!content.contains("[75_"));

        state.focus_next();
        let content = render(&state);
        assert!(content.contains("[75_"));
        assert!(!content.contains("[180_"));
    }

    #[test]
    fn button_style_reflects_focus() {
        let area = Rect::new(0, 0, 36, 6);
        let layout = form_layout(area);
        let mut state = AppState::new();
        state.focus = Focus::Submit;

        let mut buf = Buffer::empty(area);
        render_form(&state, &layout, &mut buf);

        let cell = buf
            .cell((layout.button.x, layout.button.y))
            .expect("button cell");
        assert_eq!(cell.symbol(), "[");
        assert!(cell.modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn render_message_shows_error_text() {
        let area = Rect::new(0, 0, 36, 1);
        let mut buf = Buffer::empty(area);
        let error = EvalError::MissingInput {
            field: Field::Height,
        };

        render_message(Some(&error), area, &mut buf);

        assert!(buffer_to_string(&buf).contains("height is required"));
    }

    #[test]
    fn render_message_without_error_is_blank() {
        let area = Rect::new(0, 0, 36, 1);
        let mut buf = Buffer::empty(area);

        render_message(None, area, &mut buf);

        assert_eq!(buffer_to_string(&buf), "\n");
    }

    #[test]
    fn tiny_area_does_not_panic() {
        let area = Rect::new(0, 0, 3, 2);
        let mut buf = Buffer::empty(area);
        render_form(&AppState::new(), &form_layout(area), &mut buf);
    }
}
