mod block;
mod context;

pub use block::{EntryBlock, scan_blocks};
pub use context::ContextExtractor;

/// Comment marker introducing a flags line (`#, fuzzy, c-format`).
pub const FLAGS_MARKER: &str = "#,";

/// Flag token marking an entry as needing review.
pub const FUZZY_FLAG: &str = "fuzzy";

/// Returns true if the line is a flags comment carrying the fuzzy token.
#[must_use]
pub fn is_review_flag_line(line: &str) -> bool {
    line.contains("#, ") && line.contains(FUZZY_FLAG)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
