//! Inventory table formatting using comfy-table.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use marina_types::{Boat, Location};

use super::output::format_money;

const COLUMNS: [&str; 4] = ["Name", "Length", "Location", "Owed"];

/// Renders the location column, e.g. `slip #12` or `trailer NVZ123`.
pub fn format_location(location: &Location) -> String {
    match location {
        Location::Slip { number } => format!("slip #{number}"),
        Location::Land { bay } => format!("land {bay}"),
        Location::Trailer { tag } => format!("trailer {tag}"),
        Location::Storage { space } => format!("storage #{space}"),
    }
}

/// Creates a styled table listing boats in the order given.
pub fn inventory_table<'a>(boats: impl IntoIterator<Item = &'a Boat>) -> Table {
    let mut table = Table::new();

    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let header_cells: Vec<Cell> = COLUMNS
        .iter()
        .map(|col| {
            if super::no_color() {
                Cell::new(col)
            } else {
                Cell::new(col)
                    .add_attribute(Attribute::Bold)
                    .fg(Color::Cyan)
            }
        })
        .collect();
    table.set_header(header_cells);

    for boat in boats {
        table.add_row(vec![
            Cell::new(&boat.name),
            Cell::new(format!("{:.0}'", boat.length)).set_alignment(CellAlignment::Right),
            Cell::new(format_location(&boat.location)),
            Cell::new(format_money(boat.amount_owed)).set_alignment(CellAlignment::Right),
        ]);
    }

    table
}
