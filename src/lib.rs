//! Roman numeral generation engine.
//!
//! One pure conversion: a non-negative integer in, its roman numeral
//! rendering out, optionally lowercased. All lookup tables are compile
//! time constants, so calls are safe from any thread.

pub mod generator;
pub mod trace_init;

#[cfg(test)]
mod tests;

pub use generator::{generate, try_generate, GenerateError};
