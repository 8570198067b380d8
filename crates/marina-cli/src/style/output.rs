//! Output helper functions for consistent styled messages.
//!
//! Every helper writes to a caller-supplied sink so the session can be driven
//! against in-memory buffers.

use std::io::{self, Write};

use super::colors::SemanticStyle;

/// Writes a success message with a checkmark.
pub fn write_success(out: &mut impl Write, msg: &str) -> io::Result<()> {
    writeln!(out, "{} {}", "✓".success(), msg)
}

/// Writes an error message with an X mark.
pub fn write_error(out: &mut impl Write, msg: &str) -> io::Result<()> {
    writeln!(out, "{} {}", "✗".error(), msg)
}

/// Writes a warning message with a warning symbol.
pub fn write_warn(out: &mut impl Write, msg: &str) -> io::Result<()> {
    writeln!(out, "{} {}", "⚠".warning(), msg)
}

/// Writes a hint/detail line with an arrow.
pub fn write_hint(out: &mut impl Write, msg: &str) -> io::Result<()> {
    writeln!(out, "  {} {}", "→".muted(), msg.muted())
}

/// Writes a prompt and flushes so it shows before input is read.
pub fn write_prompt(out: &mut impl Write, prompt: &str) -> io::Result<()> {
    write!(out, "{} : ", prompt.header())?;
    out.flush()
}

/// Writes an empty line for spacing.
pub fn write_spacer(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)
}

/// Formats a dollar amount with two decimals.
pub fn format_money(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}${:.2}", amount.abs())
}
