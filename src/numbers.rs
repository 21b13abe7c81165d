use std::{
    io::{self, Write},
    ops::RangeInclusive,
};

use crate::utils;

/// Prints the label and then every integer of `range` in ascending order.
pub fn print_numbers<W: Write>(out: &mut W, range: RangeInclusive<u32>) -> io::Result<()> {
    writeln!(
        out,
        "Printing numbers from {} to {}:",
        range.start(),
        range.end()
    )?;
    utils::write_tokens(out, range)
}
