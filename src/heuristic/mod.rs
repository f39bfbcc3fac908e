mod normalize;
mod shift;

pub use normalize::ContextNormalizer;
pub use shift::{LineShiftEvaluator, Verdict, VerdictReason};

/// Location annotation embedded in msgctxt text: `:<start>-<length>`.
pub(crate) const LOCATION_PATTERN: &str = r":(\d+)-(\d+)";
