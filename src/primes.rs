use std::io::{self, Write};

use crate::utils;

/// Trial division up to and including floor(sqrt(n)).
pub fn is_prime(n: u32) -> bool {
    if n < 2 {
        return false;
    }
    let n = u64::from(n);
    let mut divisor: u64 = 2;
    while divisor * divisor <= n {
        if n % divisor == 0 {
            return false;
        }
        divisor += 1;
    }
    true
}

/// Every prime in `[2, limit]`, ascending.
pub fn primes_up_to(limit: u32) -> Vec<u32> {
    (2..=limit).filter(|&n| is_prime(n)).collect()
}

pub fn print_primes<W: Write>(out: &mut W, limit: u32) -> io::Result<()> {
    writeln!(out, "Prime numbers up to {}:", limit)?;
    utils::write_tokens(out, primes_up_to(limit))
}
