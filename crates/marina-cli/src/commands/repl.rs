//! The interactive menu loop.
//!
//! Reads one command letter per line and dispatches it until `X` or end of
//! input. Commands that need more input prompt for it on the following lines.

use std::io::{self, BufRead, Write};

use marina_registry::Registry;

use super::{Command, add, inventory, month, payment, remove};
use crate::style::{write_error, write_prompt, write_spacer};

/// Menu prompt.
const MENU: &str = "(I)nventory, (A)dd, (R)emove, (P)ayment, (M)onth, e(X)it";

const ADD_PROMPT: &str = "Please enter the boat data in CSV format";
const NAME_PROMPT: &str = "Please enter the boat name";
const AMOUNT_PROMPT: &str = "Please enter the amount to be paid";

/// Runs the menu loop until the user exits or input ends.
pub fn run(registry: &mut Registry, mut input: impl BufRead, mut out: impl Write) -> io::Result<()> {
    loop {
        write_prompt(&mut out, MENU)?;

        let Some(line) = read_line(&mut input, &mut out)? else {
            // EOF (Ctrl+D)
            writeln!(out)?;
            break;
        };

        let Some(letter) = line.trim_start().chars().next() else {
            continue;
        };

        let Some(command) = Command::from_letter(letter) else {
            writeln!(out, "Invalid option {letter}")?;
            write_spacer(&mut out)?;
            continue;
        };

        tracing::debug!(?command, "dispatching command");

        match command {
            Command::Inventory => inventory::run(registry, &mut out)?,
            Command::Add => {
                if let Some(data) = ask(&mut input, &mut out, ADD_PROMPT)? {
                    add::run(registry, &data, &mut out)?;
                }
            }
            Command::Remove => {
                if let Some(name) = ask(&mut input, &mut out, NAME_PROMPT)? {
                    remove::run(registry, &name, &mut out)?;
                }
            }
            Command::Payment => {
                let Some(name) = ask(&mut input, &mut out, NAME_PROMPT)? else {
                    continue;
                };
                if !payment::boat_exists(registry, &name) {
                    write_error(&mut out, "No boat with that name")?;
                    write_spacer(&mut out)?;
                    continue;
                }
                if let Some(amount) = ask(&mut input, &mut out, AMOUNT_PROMPT)? {
                    payment::run(registry, &name, &amount, &mut out)?;
                }
            }
            Command::Month => month::run(registry, &mut out)?,
            Command::Exit => break,
        }
    }

    Ok(())
}

/// Prompts and reads one line. `None` means input ended.
fn ask(input: &mut impl BufRead, out: &mut impl Write, prompt: &str) -> io::Result<Option<String>> {
    write_prompt(out, prompt)?;
    read_line(input, out)
}

/// Reads one line without its terminator.
///
/// A line that is not valid UTF-8 is reported and read as empty.
fn read_line(input: &mut impl BufRead, out: &mut impl Write) -> io::Result<Option<String>> {
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => Ok(None),
        Ok(_) => {
            let len = line.trim_end_matches(['\n', '\r']).len();
            line.truncate(len);
            Ok(Some(line))
        }
        Err(e) if e.kind() == io::ErrorKind::InvalidData => {
            write_error(out, &format!("Error reading input: {e}"))?;
            Ok(Some(String::new()))
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marina_types::{Boat, Location};

    fn session(registry: &mut Registry, script: &str) -> String {
        crate::style::set_no_color(true);
        let mut out = Vec::new();
        run(registry, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn alice() -> Registry {
        let mut registry = Registry::new();
        registry
            .insert(Boat::new("Alice", 40.0, Location::Slip { number: 12 }, 0.0))
            .unwrap();
        registry
    }

    #[test]
    fn exit_stops_the_loop() {
        let mut registry = alice();
        let output = session(&mut registry, "x\nM\n");
        assert!(output.contains(MENU));
        assert_eq!(registry.get("Alice").unwrap().amount_owed, 0.0);
    }

    #[test]
    fn end_of_input_stops_the_loop() {
        let mut registry = alice();
        session(&mut registry, "M\n");
        assert_eq!(registry.get("Alice").unwrap().amount_owed, 500.0);
    }

    #[test]
    fn unknown_letter_is_reported() {
        let mut registry = alice();
        let output = session(&mut registry, "Q\nX\n");
        assert!(output.contains("Invalid option Q"));
    }

    #[test]
    fn blank_line_reprompts_silently() {
        let mut registry = alice();
        let output = session(&mut registry, "\n\nX\n");
        assert!(!output.contains("Invalid option"));
        assert_eq!(output.matches(MENU).count(), 3);
    }

    #[test]
    fn whole_words_use_their_first_letter() {
        let mut registry = alice();
        session(&mut registry, "month\nexit\n");
        assert_eq!(registry.get("Alice").unwrap().amount_owed, 500.0);
    }

    #[test]
    fn billing_cycle() {
        let mut registry = alice();
        let output = session(&mut registry, "M\nP\nAlice\n200.00\nP\nalice\n400.00\nX\n");

        assert!(output.contains("$300.00 now owed"));
        assert!(output.contains("exceeds amount owed, $300.00"));
        assert_eq!(registry.get("Alice").unwrap().amount_owed, 300.0);
    }

    #[test]
    fn payment_to_unknown_boat_skips_amount_prompt() {
        let mut registry = alice();
        let output = session(&mut registry, "P\nNobody\nX\n");

        assert!(output.contains("No boat with that name"));
        assert!(!output.contains(AMOUNT_PROMPT));
    }

    #[test]
    fn add_then_inventory_lists_alphabetically() {
        let mut registry = alice();
        registry
            .insert(Boat::new("carl", 30.0, Location::Storage { space: 2 }, 0.0))
            .unwrap();

        let output = session(&mut registry, "A\nBob,20,land,C,0.00\nI\nX\n");

        assert!(output.contains("Added Bob"));
        let listing = &output[output.find("Owed").unwrap()..];
        let alice = listing.find("Alice").unwrap();
        let bob = listing.find("Bob").unwrap();
        let carl = listing.find("carl").unwrap();
        assert!(alice < bob && bob < carl);
    }

    #[test]
    fn add_reports_bad_data() {
        let mut registry = alice();
        let output = session(&mut registry, "A\nBob,20,dock,C,0.00\nA\nBob\nX\n");

        assert!(output.contains("invalid location type"));
        assert!(output.contains("missing length"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn add_flags_out_of_range_location() {
        let mut registry = Registry::new();
        let output = session(&mut registry, "A\nFar,20,slip,99,0.00\nX\n");

        assert!(output.contains("Added Far"));
        assert!(output.contains("slip 99 is outside"));
    }

    #[test]
    fn add_when_full_is_rejected() {
        let mut registry = alice().with_max_boats(1);
        let output = session(&mut registry, "A\nBob,20,land,C,0.00\nX\n");

        assert!(output.contains("maximum number of boats reached"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn full_registry_is_reported_before_parsing() {
        let mut registry = alice().with_max_boats(1);
        let output = session(&mut registry, "A\nnot a record\nX\n");

        assert!(output.contains("maximum number of boats reached (1)"));
        assert!(!output.contains("missing length"));
    }

    #[test]
    fn remove_by_name() {
        let mut registry = alice();
        let output = session(&mut registry, "R\nALICE\nR\nAlice\nX\n");

        assert!(output.contains("Removed Alice"));
        assert!(output.contains("No boat with that name"));
        assert!(registry.is_empty());
    }

    #[test]
    fn empty_inventory_says_so() {
        let mut registry = Registry::new();
        let output = session(&mut registry, "I\nX\n");
        assert!(output.contains("No boats in inventory."));
    }
}
