use tracing::debug_span;

use super::table::{PATTERNS, SYMBOLS, SYMBOL_SETS};

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("no roman numeral form for negative number {0}")]
    Negative(i64),
}

/// Generate the roman numeral for `number`, uppercase unless
/// `lower_case` is set.
///
/// The ones, tens and hundreds digits are rendered positionally.
/// Everything above the hundreds place is flattened into
/// `number / 1000` repetitions of M, so `generate(12_000, false)` is
/// twelve M's, not a positional rendering. `generate(0, _)` is the
/// empty string.
pub fn generate(number: u64, lower_case: bool) -> String {
    let _span = debug_span!("generate", number).entered();

    let digits = number.to_string().into_bytes();
    let len = digits.len();
    let places = len.min(SYMBOL_SETS.len());

    let mut numeral = String::new();
    // Low places first; each digit's letters go in front of what the
    // lower places already produced.
    for (place, &digit) in digits[len - places..].iter().rev().enumerate() {
        let set = &SYMBOL_SETS[place];
        let pattern = PATTERNS[usize::from(digit - b'0')];
        let part: String = pattern.iter().map(|&slot| SYMBOLS[set[slot]]).collect();
        numeral.insert_str(0, &part);
    }

    if len > places {
        // Leading digits collapse to a repeat count of the largest letter.
        let thousands = number / 1_000;
        let mut prefixed = String::with_capacity(thousands as usize + numeral.len());
        for _ in 0..thousands {
            prefixed.push(SYMBOLS[SYMBOLS.len() - 1]);
        }
        prefixed.push_str(&numeral);
        numeral = prefixed;
    }

    if lower_case {
        numeral.make_ascii_lowercase();
    }
    numeral
}

/// Checked variant of [`generate`] for callers holding signed integers.
///
/// Negative numbers have no roman numeral form and are rejected rather
/// than wrapped or silently mangled.
pub fn try_generate(number: i64, lower_case: bool) -> Result<String, GenerateError> {
    match u64::try_from(number) {
        Ok(n) => Ok(generate(n, lower_case)),
        Err(_) => Err(GenerateError::Negative(number)),
    }
}
