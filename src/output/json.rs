use serde::Serialize;

use crate::error::Result;
use crate::processor::{EntryOutcome, ProcessReport};

use super::ReportFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    summary: Summary,
    entries: Vec<EntryRecord>,
}

#[derive(Serialize)]
struct Summary {
    considered: usize,
    modified: usize,
    dry_run: bool,
    input: String,
    target: String,
    backup: Option<String>,
}

#[derive(Serialize)]
struct EntryRecord {
    msgctxt: String,
    passed: bool,
    reason: &'static str,
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &ProcessReport) -> Result<String> {
        let output = JsonOutput {
            summary: Summary {
                considered: report.stats.considered,
                modified: report.stats.modified,
                dry_run: report.dry_run,
                input: report.input.display().to_string(),
                target: report.target.display().to_string(),
                backup: report.backup.as_ref().map(|p| p.display().to_string()),
            },
            entries: report.entries.iter().map(convert_entry).collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn convert_entry(entry: &EntryOutcome) -> EntryRecord {
    EntryRecord {
        msgctxt: entry.context.clone(),
        passed: entry.verdict.passed,
        reason: entry.verdict.reason.code(),
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
