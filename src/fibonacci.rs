use std::io::{self, Write};

use crate::utils;

/// Yields `count` Fibonacci terms, starting from F(0) = 0.
///
/// The next term is only summed when it is about to be returned, so every
/// term that fits in `u64` (F(0) through F(93)) is produced. Iteration stops
/// short of `count` once the following term would overflow.
pub fn terms(count: u32) -> impl Iterator<Item = u64> {
    let mut state = Some((0u64, Some(1u64)));
    (0..count).map_while(move |_| {
        let (a, b) = state?;
        state = b.map(|b| (b, a.checked_add(b)));
        Some(a)
    })
}

pub fn print_fibonacci<W: Write>(out: &mut W, count: u32) -> io::Result<()> {
    writeln!(out, "First {} Fibonacci numbers:", count)?;
    utils::write_tokens(out, terms(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_five_terms() {
        assert_eq!(terms(5).collect::<Vec<_>>(), vec![0, 1, 1, 2, 3]);
    }

    #[test]
    fn emits_exactly_count_terms() {
        for count in 0..30 {
            assert_eq!(terms(count).count(), count as usize);
        }
    }

    #[test]
    fn terms_follow_recurrence() {
        let values: Vec<u64> = terms(20).collect();
        assert_eq!(values[0], 0);
        assert_eq!(values[1], 1);
        for k in 2..values.len() {
            assert_eq!(values[k], values[k - 1] + values[k - 2]);
        }
        assert_eq!(values[19], 4181);
    }

    #[test]
    fn last_terms_that_fit_in_u64() {
        assert_eq!(terms(93).last(), Some(7_540_113_804_746_346_429));
        assert_eq!(terms(94).last(), Some(12_200_160_415_121_876_738));
        assert_eq!(terms(94).count(), 94);
    }

    #[test]
    fn stops_once_terms_overflow() {
        assert_eq!(terms(200).count(), 94);
    }

    #[test]
    fn zero_count_prints_blank_data_line() {
        let mut out = Vec::new();
        print_fibonacci(&mut out, 0).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "First 0 Fibonacci numbers:\n\n");
    }

    #[test]
    fn prints_label_and_terms() {
        let mut out = Vec::new();
        print_fibonacci(&mut out, 5).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "First 5 Fibonacci numbers:\n0 1 1 2 3 \n"
        );
    }
}
