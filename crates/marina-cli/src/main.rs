//! Marina boat registry CLI.
//!
//! Loads the boat data file, runs the interactive menu on stdin, then writes
//! the registry back to the same file.
//!
//! # Quick Start
//!
//! ```bash
//! # Start a session against a data file (created on exit if missing)
//! marina boats.csv
//!
//! # Non-interactive: bill a month and exit
//! printf 'M\nX\n' | marina boats.csv
//! ```

mod commands;
mod style;

use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use marina_config::MarinaConfig;
use marina_registry::{LoadReport, PaymentPolicy, Registry};

use crate::style::{write_banner, write_error, write_farewell, write_hint, write_warn};

/// Marina - boat inventory and monthly billing.
#[derive(Parser)]
#[command(name = "marina")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Boat data file, one `name,length,kind,detail,owed` record per line.
    file: PathBuf,
}

fn main() -> Result<()> {
    // Diagnostics go to stderr; user-facing messages are printed directly
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .init();

    let cli = Cli::parse();

    let mut stderr = io::stderr().lock();

    let config = match MarinaConfig::load() {
        Ok(config) => config,
        Err(e) => {
            write_warn(&mut stderr, &format!("Ignoring configuration: {e:#}"))?;
            MarinaConfig::default()
        }
    };

    style::set_no_color(
        config.display.no_color
            || std::env::var_os("NO_COLOR").is_some()
            || !io::stdout().is_terminal(),
    );

    let payment_policy = if config.registry.reject_non_positive_payments {
        PaymentPolicy::RejectNonPositive
    } else {
        PaymentPolicy::Lenient
    };

    let (mut registry, report) = Registry::new()
        .with_max_boats(config.registry.capacity)
        .with_rates(config.rates)
        .with_payment_policy(payment_policy)
        .load(&cli.file);
    report_load(&mut stderr, &report)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    write_banner(&mut stdout)?;

    // Whatever happened in the session, the data collected so far is saved
    if let Err(e) = commands::repl::run(&mut registry, stdin.lock(), &mut stdout) {
        write_error(&mut stderr, &format!("Error: {e}"))?;
    }

    save(&registry, &cli.file, &mut stderr)?;

    write_farewell(&mut stdout)?;
    stdout.flush()?;

    Ok(())
}

/// Tells the user about anything the load could not take in.
fn report_load(out: &mut impl Write, report: &LoadReport) -> io::Result<()> {
    if let Some(e) = &report.unavailable {
        write_warn(out, &format!("Warning: {e}"))?;
        if report.loaded == 0 {
            write_hint(out, "starting with an empty registry")?;
        } else {
            write_hint(
                out,
                &format!("keeping the {} record(s) read before the failure", report.loaded),
            )?;
        }
    }

    if !report.skipped.is_empty() {
        write_warn(
            out,
            &format!("Skipped {} unreadable line(s)", report.skipped.len()),
        )?;
        for skipped in &report.skipped {
            write_hint(out, &format!("line {}: {}", skipped.line_number, skipped.error))?;
        }
    }

    if report.dropped > 0 {
        write_warn(
            out,
            &format!(
                "Registry full, ignored {} further record(s)",
                report.dropped
            ),
        )?;
    }

    Ok(())
}

/// Saves the registry, reporting failure without aborting.
fn save(registry: &Registry, path: &Path, out: &mut impl Write) -> io::Result<()> {
    if let Err(e) = registry.save(path) {
        write_error(out, &format!("Error: {e}"))?;
    }
    Ok(())
}
