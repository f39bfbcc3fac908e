use super::is_review_flag_line;

/// A contiguous run of catalog lines belonging to one review-flagged entry.
///
/// Half-open range into the original line sequence: starts at the flags line,
/// ends at the next blank line (exclusive). Recomputed per scan, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryBlock {
    pub start: usize,
    pub end: usize,
}

impl EntryBlock {
    /// Borrow the block's lines out of the full sequence.
    #[must_use]
    pub fn lines<'a>(&self, lines: &'a [String]) -> &'a [String] {
        &lines[self.start..self.end]
    }
}

/// Scan the full line sequence once and collect review-flagged entry blocks.
///
/// A block starts at a line containing both the flags marker and the fuzzy
/// token and extends through subsequent non-blank lines. Scanning resumes at
/// the terminating blank line, so blocks never overlap.
#[must_use]
pub fn scan_blocks(lines: &[String]) -> Vec<EntryBlock> {
    let mut blocks = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        if is_review_flag_line(&lines[i]) {
            let start = i;
            let mut end = i + 1;
            while end < lines.len() && !lines[end].trim().is_empty() {
                end += 1;
            }
            blocks.push(EntryBlock { start, end });
            i = end;
        } else {
            i += 1;
        }
    }

    blocks
}

#[cfg(test)]
#[path = "block_tests.rs"]
mod tests;
