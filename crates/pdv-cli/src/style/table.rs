//! Table formatting using comfy-table.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

/// Creates an empty table with the house style and a bold header row.
pub fn styled_table(headers: &[&str]) -> Table {
    let mut table = Table::new();

    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let header_cells: Vec<Cell> = headers
        .iter()
        .map(|h| {
            if super::no_color() {
                Cell::new(h)
            } else {
                Cell::new(h).add_attribute(Attribute::Bold).fg(Color::Cyan)
            }
        })
        .collect();
    table.set_header(header_cells);

    table
}

/// Cell showing whether a permission is granted.
pub fn grant_cell(granted: bool) -> Cell {
    let (symbol, color) = if granted {
        ("✓", Color::Green)
    } else {
        ("✗", Color::DarkGrey)
    };

    if super::no_color() {
        Cell::new(symbol)
    } else {
        Cell::new(symbol).fg(color)
    }
}
