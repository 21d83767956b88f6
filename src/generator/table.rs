//! Fixed lookup tables driving numeral construction.

/// The seven numeral letters, ordered by ascending value
/// (1, 5, 10, 50, 100, 500, 1000).
pub(crate) const SYMBOLS: [char; 7] = ['I', 'V', 'X', 'L', 'C', 'D', 'M'];

/// Per decimal place, the indices into [`SYMBOLS`] for that place's
/// unit, five and ten letters.
pub(crate) const SYMBOL_SETS: [[usize; 3]; 3] = [
    [0, 1, 2], // ones: I V X
    [2, 3, 4], // tens: X L C
    [4, 5, 6], // hundreds: C D M
];

/// How each decimal digit 0-9 is composed from its place's symbol set.
/// Slot 0 selects the unit letter, 1 the five letter, 2 the ten letter.
pub(crate) const PATTERNS: [&[usize]; 10] = [
    &[],
    &[0],
    &[0, 0],
    &[0, 0, 0],
    &[0, 1],
    &[1],
    &[1, 0],
    &[1, 0, 0],
    &[1, 0, 0, 0],
    &[0, 2],
];
