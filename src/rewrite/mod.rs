use crate::catalog::{FLAGS_MARKER, FUZZY_FLAG};

/// Remove the fuzzy token from a `#,` flags line, preserving other flags.
///
/// Returns the empty string when fuzzy was the only flag; the caller must
/// delete such a line outright (a blank in its place would split the entry).
/// Lines without the flags marker are returned unchanged.
#[must_use]
pub fn strip_review_flag(line: &str) -> String {
    let Some((prefix, after)) = line.split_once(FLAGS_MARKER) else {
        return line.to_string();
    };

    let kept: Vec<&str> = after
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty() && *token != FUZZY_FLAG)
        .collect();

    if kept.is_empty() {
        return String::new();
    }
    format!("{prefix}{FLAGS_MARKER} {}", kept.join(", "))
}

/// Collapse runs of blank lines to a single separator.
///
/// The start of the sequence counts as blank, so a leading blank run is
/// stripped entirely. Kept lines are passed through verbatim.
#[must_use]
pub fn collapse_blank_runs(lines: &[String]) -> Vec<String> {
    let mut cleaned = Vec::with_capacity(lines.len());
    let mut last_blank = true;

    for line in lines {
        let is_blank = line.trim().is_empty();
        if is_blank && last_blank {
            continue;
        }
        cleaned.push(line.clone());
        last_blank = is_blank;
    }

    cleaned
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
