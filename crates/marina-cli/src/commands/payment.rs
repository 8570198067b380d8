//! Accept a payment against a boat's balance.

use std::io::{self, Write};

use marina_registry::{Registry, RegistryError};
use marina_storage::parse_lenient_f64;

use crate::style::{format_money, write_error, write_spacer, write_success};

/// Checks the name before the amount is asked for.
pub fn boat_exists(registry: &Registry, name: &str) -> bool {
    registry.find(name).is_some()
}

/// Applies a payment; `amount` is the raw text the user typed.
pub fn run(
    registry: &mut Registry,
    name: &str,
    amount: &str,
    out: &mut impl Write,
) -> io::Result<()> {
    let amount = parse_lenient_f64(amount);

    match registry.apply_payment(name, amount) {
        Ok(balance) => write_success(
            out,
            &format!(
                "Payment of {} accepted, {} now owed",
                format_money(amount),
                format_money(balance)
            ),
        )?,
        Err(RegistryError::NotFound { .. }) => write_error(out, "No boat with that name")?,
        Err(e) => write_error(out, &format!("Error: {e}"))?,
    }
    write_spacer(out)
}
