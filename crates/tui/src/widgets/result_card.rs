//! Result card widget.
//!
//! The card's border color, status label, and icon are all derived from the
//! result's [`Category`].

use bmi_config::DisplayConfig;
use bmi_core::{BmiResult, Category};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Widget},
};

/// Returns the color associated with a category.
///
/// | Category | Color |
/// |----------|-------|
/// | `Underweight` | Blue |
/// | `Normal` | Green |
/// | `Overweight` | Yellow |
/// | `Obese` | Red |
#[must_use]
pub fn category_color(category: Category) -> Color {
    match category {
        Category::Underweight => Color::Blue,
        Category::Normal => Color::Green,
        Category::Overweight => Color::Yellow,
        Category::Obese => Color::Red,
    }
}

/// Returns the icon shown for a category.
#[must_use]
pub fn category_icon(category: Category) -> &'static str {
    match category {
        Category::Underweight => "😢",
        Category::Normal => "😊",
        Category::Overweight => "😐",
        Category::Obese => "😟",
    }
}

/// Renders the result card for a computed BMI.
///
/// The value and status lines are always shown; the icon and the category
/// scale follow `display`.
///
/// # Layout
///
/// ```text
/// ╭ Result ──────────────────────────╮
/// │ Your BMI is: 23.15               │
/// │ Status: Normal weight            │
/// │ 😊                               │
/// │ Under | Normal | Over | Obese    │
/// ╰──────────────────────────────────╯
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use bmi_config::DisplayConfig;
/// use bmi_core::compute;
/// use bmi_tui::widgets::render_result_card;
///
/// let result = compute(Some(180.0), Some(75.0)).unwrap();
/// let area = Rect::new(0, 0, 36, 6);
/// let mut buf = Buffer::empty(area);
///
/// render_result_card(&result, &DisplayConfig::default(), area, &mut buf);
/// ```
pub fn render_result_card(
    result: &BmiResult,
    display: &DisplayConfig,
    area: Rect,
    buf: &mut Buffer,
) {
    let category = result.category();
    let color = category_color(category);

    let block = Block::default()
        .title(Span::styled(
            " Result ",
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
        .padding(Padding::horizontal(1));

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Your BMI is: ", Style::default().fg(Color::Gray)),
            Span::styled(
                result.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Status: ", Style::default().fg(Color::Gray)),
            Span::styled(category.label(), Style::default().fg(color)),
        ]),
    ];

    if display.show_icon {
        lines.push(Line::from(category_icon(category)));
    }
    if display.show_scale {
        lines.push(scale_line(category));
    }

    Paragraph::new(lines).block(block).render(area, buf);
}

/// Builds the category scale with the current band highlighted.
fn scale_line(current: Category) -> Line<'static> {
    let separator = Style::default().fg(Color::DarkGray);
    let mut spans = Vec::with_capacity(Category::all().len() * 2);

    for (i, category) in Category::all().iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", separator));
        }

        let style = if *category == current {
            Style::default()
                .fg(category_color(*category))
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(category.short_label(), style));
    }

    Line::from(spans)
}
