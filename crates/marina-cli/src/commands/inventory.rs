//! Inventory listing.

use std::io::{self, Write};

use marina_registry::Registry;

use crate::style::{colors::SemanticStyle, format_money, inventory_table, write_spacer};

pub fn run(registry: &Registry, out: &mut impl Write) -> io::Result<()> {
    if registry.is_empty() {
        writeln!(out, "{}", "No boats in inventory.".muted())?;
        return write_spacer(out);
    }

    writeln!(out, "{}", inventory_table(registry))?;

    let count = registry.len();
    let boat_word = if count == 1 { "boat" } else { "boats" };
    writeln!(
        out,
        "{}",
        format!(
            "({count} {boat_word}, {} owed in total)",
            format_money(registry.total_owed())
        )
        .muted()
    )?;
    write_spacer(out)
}
