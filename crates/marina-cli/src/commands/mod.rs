//! Interactive command implementations.
//!
//! Each command works on the session's [`Registry`](marina_registry::Registry)
//! and writes its feedback to the session output.

pub mod add;
pub mod inventory;
pub mod month;
pub mod payment;
pub mod remove;
pub mod repl;

/// One menu choice, selected by its first letter (any case).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Inventory,
    Add,
    Remove,
    Payment,
    Month,
    Exit,
}

impl Command {
    /// Maps a menu letter to a command.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'I' => Some(Command::Inventory),
            'A' => Some(Command::Add),
            'R' => Some(Command::Remove),
            'P' => Some(Command::Payment),
            'M' => Some(Command::Month),
            'X' => Some(Command::Exit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_map_to_commands() {
        assert_eq!(Command::from_letter('i'), Some(Command::Inventory));
        assert_eq!(Command::from_letter('A'), Some(Command::Add));
        assert_eq!(Command::from_letter('r'), Some(Command::Remove));
        assert_eq!(Command::from_letter('P'), Some(Command::Payment));
        assert_eq!(Command::from_letter('m'), Some(Command::Month));
        assert_eq!(Command::from_letter('x'), Some(Command::Exit));
        assert_eq!(Command::from_letter('q'), None);
        assert_eq!(Command::from_letter('?'), None);
    }
}
