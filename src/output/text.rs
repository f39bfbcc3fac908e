use std::fmt::Write;

use crate::error::Result;
use crate::processor::ProcessReport;

use super::ReportFormatter;

/// Contexts longer than this are truncated in per-entry lines.
const CONTEXT_DISPLAY_LEN: usize = 80;

pub struct TextFormatter {
    verbose: bool,
}

impl TextFormatter {
    #[must_use]
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &ProcessReport) -> Result<String> {
        let mut out = String::new();

        if self.verbose {
            for entry in &report.entries {
                let ctx = display_context(&entry.context);
                if entry.verdict.passed {
                    let _ = writeln!(out, "[unfuzz] msgctxt={ctx}");
                } else {
                    let _ = writeln!(
                        out,
                        "[keep-fuzzy] reason={} msgctxt={ctx}",
                        entry.verdict.reason.code()
                    );
                }
            }
            if let Some(backup) = &report.backup {
                let _ = writeln!(out, "Backup saved to {}", backup.display());
            }
        }

        if report.dry_run {
            let _ = write!(
                out,
                "Dry run: {} / {} fuzzy contextual entries would be unfuzzed.",
                report.stats.modified, report.stats.considered
            );
        } else {
            let _ = write!(
                out,
                "Unfuzzed {} / {} fuzzy contextual entries. Written to {}",
                report.stats.modified,
                report.stats.considered,
                report.target.display()
            );
        }

        Ok(out)
    }
}

fn display_context(ctx: &str) -> String {
    if ctx.len() <= CONTEXT_DISPLAY_LEN {
        return ctx.to_string();
    }
    let mut cut = CONTEXT_DISPLAY_LEN;
    while !ctx.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...", &ctx[..cut])
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
