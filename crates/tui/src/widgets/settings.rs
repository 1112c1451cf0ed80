//! Settings panel widget.
//!
//! This module provides the settings panel overlay that allows users to
//! view and modify application configuration.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Widget},
};

use super::help::centered_rect;
use crate::settings_state::{SettingsItem, SettingsState};

/// The width of the settings panel.
const SETTINGS_WIDTH: u16 = 50;

/// The height of the settings panel.
const SETTINGS_HEIGHT: u16 = 11;

/// Width of the label column, so values line up.
const LABEL_WIDTH: usize = 22;

/// Renders the settings panel overlay.
///
/// # Arguments
///
/// * `state` - The settings state
/// * `area` - The full terminal area (panel will be centered within it)
/// * `buf` - The buffer to render into
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use bmi_config::Config;
/// use bmi_tui::settings_state::SettingsState;
/// use bmi_tui::widgets::render_settings_panel;
///
/// let state = SettingsState::new(Config::default());
/// let area = Rect::new(0, 0, 80, 24);
/// let mut buf = Buffer::empty(area);
///
/// render_settings_panel(&state, area, &mut buf);
/// ```
pub fn render_settings_panel(state: &SettingsState, area: Rect, buf: &mut Buffer) {
    let popup_area = centered_rect(SETTINGS_WIDTH, SETTINGS_HEIGHT, area);

    Clear.render(popup_area, buf);

    let title = if state.is_dirty() {
        " Settings (modified) "
    } else {
        " Settings "
    };
    let block = Block::default()
        .title(Span::styled(
            title,
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(popup_area);
    block.render(popup_area, buf);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacer
            Constraint::Min(0),    // Items
            Constraint::Length(1), // Notice
            Constraint::Length(1), // Help
        ])
        .split(inner);

    render_items(state, chunks[1], buf);
    render_notice(state, chunks[2], buf);
    render_settings_help(state, chunks[3], buf);
}

/// Renders one line per settings item.
fn render_items(state: &SettingsState, area: Rect, buf: &mut Buffer) {
    let selected = state.selected();

    let items: Vec<ListItem> = SettingsItem::all()
        .iter()
        .map(|&item| {
            let is_selected = item == selected;
            let style = if is_selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let value = match state.edit_mode().value() {
                Some(text) if is_selected => format!("{text}_"),
                _ => state.item_value(item),
            };
            let prefix = if is_selected { "> " } else { "  " };

            ListItem::new(Line::from(vec![
                Span::styled(prefix, style),
                Span::styled(
                    format!("{:<width$}", item.label(), width = LABEL_WIDTH),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(value, style),
            ]))
        })
        .collect();

    List::new(items).render(area, buf);
}

/// Renders the notice from the last rejected edit or save attempt.
fn render_notice(state: &SettingsState, area: Rect, buf: &mut Buffer) {
    let Some(notice) = state.notice() else {
        return;
    };

    Paragraph::new(Line::from(Span::styled(
        notice,
        Style::default().fg(Color::Red),
    )))
    .alignment(Alignment::Center)
    .render(area, buf);
}

/// Renders the help line at the bottom of the settings panel.
fn render_settings_help(state: &SettingsState, area: Rect, buf: &mut Buffer) {
    let help_text = if state.is_editing() {
        "Enter: confirm | Esc: cancel"
    } else {
        "↑↓: navigate | Enter: change | s: save | Esc: close"
    };

    Paragraph::new(Line::from(Span::styled(
        help_text,
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center)
    .render(area, buf);
}
