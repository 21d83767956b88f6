//! Property-based tests for the numeral generator.
//!
//! Checks the generator against an independent greedy reference
//! implementation and a small numeral parser, neither of which shares
//! code or tables with the generator itself.

use proptest::prelude::*;

use crate::generator::{generate, try_generate};

/// Independent reference: classic greedy walk over subtractive pairs.
/// Valid for values up to 3999.
fn reference_roman(mut n: u64) -> String {
    const PAIRS: [(u64, &str); 13] = [
        (1000, "M"),
        (900, "CM"),
        (500, "D"),
        (400, "CD"),
        (100, "C"),
        (90, "XC"),
        (50, "L"),
        (40, "XL"),
        (10, "X"),
        (9, "IX"),
        (5, "V"),
        (4, "IV"),
        (1, "I"),
    ];
    let mut out = String::new();
    for (value, letters) in PAIRS {
        while n >= value {
            out.push_str(letters);
            n -= value;
        }
    }
    out
}

/// Independent parser: subtractive-rule sum over letter values.
fn parse_roman(numeral: &str) -> i64 {
    let values: Vec<i64> = numeral
        .chars()
        .map(|c| match c {
            'I' => 1,
            'V' => 5,
            'X' => 10,
            'L' => 50,
            'C' => 100,
            'D' => 500,
            'M' => 1000,
            other => panic!("unexpected letter {other:?}"),
        })
        .collect();
    let mut total = 0;
    for (i, &v) in values.iter().enumerate() {
        if values.get(i + 1).is_some_and(|&next| next > v) {
            total -= v;
        } else {
            total += v;
        }
    }
    total
}

#[test]
fn matches_reference_up_to_3999() {
    for n in 0..=3999 {
        assert_eq!(generate(n, false), reference_roman(n), "mismatch at n={n}");
    }
}

proptest! {
    #[test]
    fn lowercase_is_uppercase_lowercased(n in 0u64..10_000_000) {
        prop_assert_eq!(generate(n, true), generate(n, false).to_ascii_lowercase());
    }

    #[test]
    fn thousands_prefix_flattens(n in 4_000u64..100_000_000) {
        let expected = format!(
            "{}{}",
            "M".repeat((n / 1_000) as usize),
            generate(n % 1_000, false)
        );
        prop_assert_eq!(generate(n, false), expected);
    }

    #[test]
    fn roundtrip_through_parser(n in 1u64..=3_999) {
        prop_assert_eq!(parse_roman(&generate(n, false)), n as i64);
    }

    #[test]
    fn try_generate_agrees_on_non_negative(n in 0i64..10_000_000) {
        prop_assert_eq!(try_generate(n, false).unwrap(), generate(n as u64, false));
    }

    #[test]
    fn try_generate_rejects_negative(n in i64::MIN..0) {
        prop_assert!(try_generate(n, false).is_err());
    }
}
