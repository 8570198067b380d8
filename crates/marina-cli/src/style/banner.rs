//! Welcome and farewell banners.

use std::io::{self, Write};

use super::colors::SemanticStyle;

const TITLE: &str = "Boat Management System";

/// Writes the welcome banner shown after the data file is loaded.
pub fn write_banner(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", format!("Welcome to the {TITLE}").info())?;
    writeln!(out, "{}", "-".repeat(TITLE.len() + 15).muted())?;
    writeln!(out)
}

/// Writes the farewell line shown after the data file is saved.
pub fn write_farewell(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Exiting the {TITLE}")
}
