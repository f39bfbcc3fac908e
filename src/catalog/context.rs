use regex::Regex;

const PREV_HEADER_PREFIX: &str = "#| msgctxt";
const PREV_CONT_PREFIX: &str = "#| \"";
const CUR_HEADER_PREFIX: &str = "msgctxt ";
const CUR_CONT_PREFIX: &str = "\"";

/// Extracts previous and current msgctxt strings from an entry block.
///
/// Both contexts may span a header line plus quoted continuation lines;
/// fragments are concatenated literally, with no implicit separator.
pub struct ContextExtractor {
    prev_header: Regex,
    prev_cont: Regex,
    cur_header: Regex,
    cur_cont: Regex,
}

impl Default for ContextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ContextExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self {
            prev_header: Regex::new(r#"^#\|\s*msgctxt\s+"(.*)""#).expect("Invalid regex"),
            prev_cont: Regex::new(r#"^#\| "(.*)""#).expect("Invalid regex"),
            cur_header: Regex::new(r#"^msgctxt\s+"(.*)""#).expect("Invalid regex"),
            cur_cont: Regex::new(r#"^"(.*)""#).expect("Invalid regex"),
        }
    }

    /// Collect the previous msgctxt from `#| msgctxt "..."` comment lines.
    ///
    /// Returns `None` when the block carries no historical context.
    #[must_use]
    pub fn previous_context(&self, block: &[String]) -> Option<String> {
        collect_fragments(
            block,
            PREV_HEADER_PREFIX,
            PREV_CONT_PREFIX,
            &self.prev_header,
            &self.prev_cont,
        )
    }

    /// Collect the current msgctxt from the active `msgctxt "..."` declaration.
    #[must_use]
    pub fn current_context(&self, block: &[String]) -> Option<String> {
        collect_fragments(
            block,
            CUR_HEADER_PREFIX,
            CUR_CONT_PREFIX,
            &self.cur_header,
            &self.cur_cont,
        )
    }
}

fn collect_fragments(
    block: &[String],
    header_prefix: &str,
    cont_prefix: &str,
    header: &Regex,
    cont: &Regex,
) -> Option<String> {
    let mut parts: Vec<String> = Vec::new();
    let mut collecting = false;

    for line in block {
        if !collecting && line.starts_with(header_prefix) {
            collecting = true;
            if let Some(caps) = header.captures(line) {
                parts.push(caps[1].to_string());
            }
            continue;
        }
        if collecting {
            if line.starts_with(cont_prefix) {
                if let Some(caps) = cont.captures(line) {
                    parts.push(caps[1].to_string());
                }
            } else {
                break;
            }
        }
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.concat())
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
