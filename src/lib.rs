use log::{debug, info};
use std::io::{self, Write};

pub mod fibonacci;
pub mod numbers;
pub mod pattern;
pub mod primes;
pub mod utils;

pub const BANNER: &str = "Welcome to the console showcase program!";
pub const CLOSING_MESSAGE: &str = "End of the program. Thank you!";

// Section sizes used by `run`.
pub const RANGE_START: u32 = 1;
pub const RANGE_END: u32 = 20;
pub const FIBONACCI_COUNT: u32 = 20;
pub const PRIME_LIMIT: u32 = 50;
pub const PATTERN_ROWS: u32 = 10;

/// Runs every section in order, each preceded by a divider, then prints the
/// closing message after a final divider.
///
/// Output goes to `out` only; the first failed write aborts the run.
pub fn run<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", BANNER)?;

    utils::print_divider(out)?;
    debug!("Printing range {}..={}", RANGE_START, RANGE_END);
    numbers::print_numbers(out, RANGE_START..=RANGE_END)?;

    utils::print_divider(out)?;
    debug!("Printing {} Fibonacci terms", FIBONACCI_COUNT);
    fibonacci::print_fibonacci(out, FIBONACCI_COUNT)?;

    utils::print_divider(out)?;
    debug!("Printing primes up to {}", PRIME_LIMIT);
    primes::print_primes(out, PRIME_LIMIT)?;

    utils::print_divider(out)?;
    debug!("Printing triangle pattern with {} rows", PATTERN_ROWS);
    pattern::print_pattern(out, PATTERN_ROWS)?;

    utils::print_divider(out)?;
    writeln!(out, "{}", CLOSING_MESSAGE)?;
    out.flush()?;

    info!("Showcase finished");
    Ok(())
}
