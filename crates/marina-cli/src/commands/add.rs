//! Add a boat from one raw data-file line.

use std::io::{self, Write};

use marina_registry::{Registry, RegistryError};
use marina_storage::decode_line;

use crate::style::{write_error, write_spacer, write_success, write_warn};

pub fn run(registry: &mut Registry, line: &str, out: &mut impl Write) -> io::Result<()> {
    if registry.is_full() {
        let e = RegistryError::CapacityExceeded {
            capacity: registry.max_boats(),
        };
        write_error(out, &format!("Error: {e}"))?;
        return write_spacer(out);
    }

    let boat = match decode_line(line) {
        Ok(boat) => boat,
        Err(e) => {
            write_error(out, &format!("Error: {e}"))?;
            return write_spacer(out);
        }
    };

    let name = boat.name.clone();
    let in_range = boat.location.is_in_range();
    let location = format!("{} {}", boat.kind(), boat.location);

    match registry.insert(boat) {
        Ok(_) => {
            write_success(out, &format!("Added {name}"))?;
            if !in_range {
                write_warn(
                    out,
                    &format!("{location} is outside the marina's numbering; stored as entered"),
                )?;
            }
        }
        Err(e) => write_error(out, &format!("Error: {e}"))?,
    }
    write_spacer(out)
}
