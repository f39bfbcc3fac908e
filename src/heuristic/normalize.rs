use regex::Regex;

use super::LOCATION_PATTERN;

/// Shortest string worth checking for self-concatenation.
const MIN_LEN: usize = 4;

/// Largest repeat count considered.
const MAX_REPEATS: usize = 6;

/// Repairs a msgctxt that was accidentally duplicated by concatenation.
///
/// Upstream tooling sometimes emits `path:876-17path:876-17` where a single
/// `path:876-17` was meant; left alone, every such entry would spuriously
/// fail the structural-match check.
pub struct ContextNormalizer {
    location: Regex,
}

impl Default for ContextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl ContextNormalizer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            location: Regex::new(LOCATION_PATTERN).expect("Invalid regex"),
        }
    }

    /// Collapse a context that is exactly a shorter segment repeated k times
    /// (k in 2..=6, smallest k wins) where the segment carries at least one
    /// location pattern. Anything else is returned unchanged, including
    /// partial duplication with trailing leftover characters.
    #[must_use]
    pub fn normalize<'a>(&self, ctx: &'a str) -> &'a str {
        let length = ctx.len();
        if length < MIN_LEN {
            return ctx;
        }

        for k in 2..=MAX_REPEATS {
            if length % k != 0 {
                continue;
            }
            let part_len = length / k;
            if !ctx.is_char_boundary(part_len) {
                continue;
            }
            let segment = &ctx[..part_len];
            let repeated = ctx
                .as_bytes()
                .chunks_exact(part_len)
                .all(|chunk| chunk == segment.as_bytes());
            if repeated && self.location.is_match(segment) {
                return segment;
            }
        }

        ctx
    }
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
