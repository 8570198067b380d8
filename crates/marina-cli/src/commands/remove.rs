//! Remove a boat by name.

use std::io::{self, Write};

use marina_registry::{Registry, RegistryError};

use crate::style::{write_error, write_spacer, write_success};

pub fn run(registry: &mut Registry, name: &str, out: &mut impl Write) -> io::Result<()> {
    match registry.remove(name) {
        Ok(boat) => write_success(out, &format!("Removed {}", boat.name))?,
        Err(RegistryError::NotFound { .. }) => write_error(out, "No boat with that name")?,
        Err(e) => write_error(out, &format!("Error: {e}"))?,
    }
    write_spacer(out)
}
