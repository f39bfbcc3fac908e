use regex::Regex;

use super::LOCATION_PATTERN;

/// Contexts longer than this are shortened in debug traces.
const TRACE_MAX_LEN: usize = 180;

/// Why the line-shift heuristic accepted or rejected a context pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerdictReason {
    ThresholdDisabled,
    StructuralMismatch,
    MatchCountMismatch,
    NonInteger,
    DeltaExceeded,
    Ok,
    OkIdentical,
}

impl VerdictReason {
    /// Stable reason code used in reports.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::ThresholdDisabled => "threshold_disabled",
            Self::StructuralMismatch => "structural_mismatch",
            Self::MatchCountMismatch => "match_count_mismatch",
            Self::NonInteger => "non_integer",
            Self::DeltaExceeded => "delta_exceeded",
            Self::Ok => "ok",
            Self::OkIdentical => "ok_identical",
        }
    }
}

/// Outcome of evaluating one previous/current context pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub passed: bool,
    pub reason: VerdictReason,
}

impl Verdict {
    const fn pass(reason: VerdictReason) -> Self {
        Self {
            passed: true,
            reason,
        }
    }

    const fn fail(reason: VerdictReason) -> Self {
        Self {
            passed: false,
            reason,
        }
    }
}

/// Compares two location-context strings structurally and numerically.
///
/// Deliberately conservative: only changes that are pure numeric-offset
/// shifts at every location marker, in the same order and within the
/// threshold, pass. Everything else is a real content change that keeps the
/// entry flagged for human review.
pub struct LineShiftEvaluator {
    location: Regex,
    threshold: i64,
    debug: bool,
}

impl LineShiftEvaluator {
    #[must_use]
    pub fn new(threshold: i64) -> Self {
        Self {
            location: Regex::new(LOCATION_PATTERN).expect("Invalid regex"),
            threshold,
            debug: false,
        }
    }

    #[must_use]
    pub const fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Evaluate an (already normalized) previous/current context pair.
    ///
    /// The threshold check precedes the equality check: a threshold of zero
    /// or below fails every pair, identical ones included.
    #[must_use]
    pub fn evaluate(&self, old_ctx: &str, new_ctx: &str) -> Verdict {
        if self.threshold <= 0 {
            self.trace("threshold <= 0; heuristic disabled");
            return Verdict::fail(VerdictReason::ThresholdDisabled);
        }

        if old_ctx == new_ctx {
            return Verdict::pass(VerdictReason::OkIdentical);
        }

        let old_skeleton = self.location.replace_all(old_ctx, ":X-X");
        let new_skeleton = self.location.replace_all(new_ctx, ":X-X");
        if self.debug {
            self.trace(&format!("old_ctx = {}", shorten(old_ctx)));
            self.trace(&format!("new_ctx = {}", shorten(new_ctx)));
            self.trace(&format!("old_skeleton = {}", shorten(&old_skeleton)));
            self.trace(&format!("new_skeleton = {}", shorten(&new_skeleton)));
        }
        if old_skeleton != new_skeleton {
            self.trace("structural mismatch");
            return Verdict::fail(VerdictReason::StructuralMismatch);
        }

        let old_starts: Vec<&str> = self
            .location
            .captures_iter(old_ctx)
            .map(|caps| caps.get(1).map_or("", |m| m.as_str()))
            .collect();
        let new_starts: Vec<&str> = self
            .location
            .captures_iter(new_ctx)
            .map(|caps| caps.get(1).map_or("", |m| m.as_str()))
            .collect();
        if self.debug {
            self.trace(&format!(
                "old_matches={} new_matches={} threshold={}",
                old_starts.len(),
                new_starts.len(),
                self.threshold
            ));
        }
        if old_starts.len() != new_starts.len() {
            return Verdict::fail(VerdictReason::MatchCountMismatch);
        }

        for (idx, (old_start, new_start)) in old_starts.iter().zip(&new_starts).enumerate() {
            let (Ok(old_n), Ok(new_n)) = (old_start.parse::<i64>(), new_start.parse::<i64>())
            else {
                return Verdict::fail(VerdictReason::NonInteger);
            };
            let delta = (old_n - new_n).abs();
            if self.debug {
                self.trace(&format!(
                    "pair {idx}: old={old_n} new={new_n} delta={delta}"
                ));
            }
            if delta > self.threshold {
                return Verdict::fail(VerdictReason::DeltaExceeded);
            }
        }

        Verdict::pass(VerdictReason::Ok)
    }

    fn trace(&self, msg: &str) {
        if self.debug {
            eprintln!("[line-shift] {msg}");
        }
    }
}

fn shorten(s: &str) -> String {
    if s.len() <= TRACE_MAX_LEN {
        return s.to_string();
    }
    let mut cut = TRACE_MAX_LEN - 3;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...", &s[..cut])
}

#[cfg(test)]
#[path = "shift_tests.rs"]
mod tests;
