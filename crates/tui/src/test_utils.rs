//! Test helpers shared by the TUI test modules.

use ratatui::buffer::Buffer;

/// Renders a [`Buffer`] as text, one line per row.
///
/// Trailing spaces are trimmed from each row so snapshots stay readable.
#[must_use]
pub(crate) fn buffer_to_string(buf: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buf.area.height {
        let row: String = (0..buf.area.width)
            .filter_map(|x| buf.cell((buf.area.x + x, buf.area.y + y)))
            .map(|cell| cell.symbol())
            .collect();
        result.push_str(row.trim_end_matches(' '));
        result.push('\n');
    }
    result
}
