use std::io::{self, Write};

use crate::utils;

pub const PATTERN_TOKEN: &str = "*";

/// Row `i` (1-based) holds `i` asterisk tokens.
pub fn print_pattern<W: Write>(out: &mut W, rows: u32) -> io::Result<()> {
    writeln!(out, "Printing a triangle pattern with {} rows:", rows)?;
    for row in 1..=rows {
        utils::write_tokens(out, std::iter::repeat(PATTERN_TOKEN).take(row as usize))?;
    }
    Ok(())
}
