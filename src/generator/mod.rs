//! Integer-to-roman-numeral generation.
//!
//! Walks the decimal digits of the input against fixed symbol tables:
//! each of the low three places maps its digit through a composition
//! pattern (additive and subtractive forms), and anything above the
//! hundreds place is flattened into a repeat count of M.

mod convert;
mod table;

pub use convert::{generate, try_generate, GenerateError};
