use std::{
    fmt::Display,
    io::{self, Write},
};

/// Separator printed between sections.
pub const DIVIDER: &str = "========================================";

/// Token separator. Every token on a data line is followed by one.
pub const TOKEN_SEPARATOR: &str = " ";

pub fn print_divider<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", DIVIDER)
}

/// Writes every token followed by a space, then ends the line.
/// An empty iterator still produces a (blank) line.
pub fn write_tokens<W, I>(out: &mut W, tokens: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator,
    I::Item: Display,
{
    for token in tokens {
        write!(out, "{}{}", token, TOKEN_SEPARATOR)?;
    }
    writeln!(out)
}
