pub mod catalog;
pub mod cli;
pub mod error;
pub mod heuristic;
pub mod output;
pub mod processor;
pub mod rewrite;

pub use error::{Result, UnfuzzyError};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_RUNTIME_ERROR: i32 = 1;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
