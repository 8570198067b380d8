//! Apply one month of charges to every boat.

use std::io::{self, Write};

use marina_registry::Registry;

use crate::style::{write_spacer, write_success};

pub fn run(registry: &mut Registry, out: &mut impl Write) -> io::Result<()> {
    let charged = registry.apply_monthly_charges();
    let boat_word = if charged == 1 { "boat" } else { "boats" };
    write_success(out, &format!("Applied monthly charges to {charged} {boat_word}"))?;
    write_spacer(out)
}
