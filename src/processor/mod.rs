use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::{ContextExtractor, scan_blocks};
use crate::error::{Result, UnfuzzyError};
use crate::heuristic::{ContextNormalizer, LineShiftEvaluator, Verdict};
use crate::rewrite::{collapse_blank_runs, strip_review_flag};

/// Suffix appended to the input path for the pre-edit backup.
const BACKUP_SUFFIX: &str = ".bak";

/// Configuration values consumed by the processor; parsing them is the
/// caller's concern.
#[derive(Debug, Clone, Copy)]
pub struct ProcessOptions {
    pub threshold: i64,
    pub dry_run: bool,
    pub keep_backup: bool,
    pub debug: bool,
}

/// Counts accumulated across one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Blocks with both contexts present that reached the evaluator.
    pub considered: usize,
    /// Blocks whose flag line was rewritten.
    pub modified: usize,
}

/// Per-entry decision, kept for verbose and JSON reporting.
#[derive(Debug, Clone)]
pub struct EntryOutcome {
    /// The entry's current msgctxt, as extracted (pre-normalization).
    pub context: String,
    pub verdict: Verdict,
}

/// Everything one run produced, handed to the output formatters.
#[derive(Debug, Clone)]
pub struct ProcessReport {
    pub stats: RunStats,
    pub entries: Vec<EntryOutcome>,
    pub input: PathBuf,
    pub target: PathBuf,
    pub backup: Option<PathBuf>,
    pub dry_run: bool,
}

pub struct FileProcessor {
    options: ProcessOptions,
    extractor: ContextExtractor,
    normalizer: ContextNormalizer,
    evaluator: LineShiftEvaluator,
}

impl FileProcessor {
    #[must_use]
    pub fn new(options: ProcessOptions) -> Self {
        Self {
            options,
            extractor: ContextExtractor::new(),
            normalizer: ContextNormalizer::new(),
            evaluator: LineShiftEvaluator::new(options.threshold).with_debug(options.debug),
        }
    }

    /// Process one catalog file and persist the edited copy unless dry-run.
    ///
    /// # Errors
    /// Returns an error when the input is missing or unreadable, or when the
    /// backup or output write fails. A backup failure aborts before the main
    /// write is attempted.
    pub fn process(&self, input: &Path, output: Option<&Path>) -> Result<ProcessReport> {
        if !input.is_file() {
            return Err(UnfuzzyError::InputNotFound(input.to_path_buf()));
        }

        let source = fs::read_to_string(input).map_err(|source| UnfuzzyError::FileRead {
            path: input.to_path_buf(),
            source,
        })?;
        let lines: Vec<String> = source.lines().map(str::to_string).collect();

        let (edited, stats, entries) = self.transform(&lines);

        let target = output.unwrap_or(input).to_path_buf();
        let report = ProcessReport {
            stats,
            entries,
            input: input.to_path_buf(),
            target: target.clone(),
            backup: None,
            dry_run: self.options.dry_run,
        };

        if self.options.dry_run {
            return Ok(report);
        }

        let backup = self.write_backup(input, &target, &source)?;

        let cleaned = collapse_blank_runs(&edited);
        write_whole(&target, &cleaned).map_err(|source| UnfuzzyError::OutputWrite {
            path: target.clone(),
            source,
        })?;

        Ok(ProcessReport { backup, ..report })
    }

    /// Pure transform: original lines in, edited copy plus statistics out.
    /// The original sequence is never mutated.
    ///
    /// A flag line whose only token was fuzzy is deleted from the copy, not
    /// blanked: a blank line is an entry separator in the catalog format, so
    /// leaving one behind would detach the entry's leading comments.
    fn transform(&self, lines: &[String]) -> (Vec<String>, RunStats, Vec<EntryOutcome>) {
        let mut edited: Vec<Option<String>> =
            lines.iter().map(|line| Some(line.clone())).collect();
        let mut stats = RunStats::default();
        let mut entries = Vec::new();

        for block in scan_blocks(lines) {
            let block_lines = block.lines(lines);
            let Some(prev_ctx) = self.extractor.previous_context(block_lines) else {
                continue;
            };
            let Some(cur_ctx) = self.extractor.current_context(block_lines) else {
                continue;
            };

            stats.considered += 1;
            let prev_norm = self.normalizer.normalize(&prev_ctx);
            let cur_norm = self.normalizer.normalize(&cur_ctx);
            let verdict = self.evaluator.evaluate(prev_norm, cur_norm);
            if verdict.passed {
                let rewritten = strip_review_flag(&lines[block.start]);
                edited[block.start] = (!rewritten.is_empty()).then_some(rewritten);
                stats.modified += 1;
            }
            entries.push(EntryOutcome {
                context: cur_ctx,
                verdict,
            });
        }

        (edited.into_iter().flatten().collect(), stats, entries)
    }

    /// Write the untouched original next to the input before editing it.
    ///
    /// Only applies when overwriting the input with backups enabled, and
    /// never overwrites an existing backup.
    fn write_backup(
        &self,
        input: &Path,
        target: &Path,
        source: &str,
    ) -> Result<Option<PathBuf>> {
        if !self.options.keep_backup || target != input {
            return Ok(None);
        }
        let backup_path = backup_path_for(input);
        if backup_path.exists() {
            return Ok(None);
        }
        fs::write(&backup_path, source).map_err(|source| UnfuzzyError::BackupWrite {
            path: backup_path.clone(),
            source,
        })?;
        Ok(Some(backup_path))
    }
}

/// Derive the backup path by appending the suffix to the full input name.
#[must_use]
pub fn backup_path_for(input: &Path) -> PathBuf {
    let mut name = input.as_os_str().to_os_string();
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}

/// Persist the line sequence as one whole write: the content is fully
/// composed in memory first, so a failure leaves no partial output.
fn write_whole(path: &Path, lines: &[String]) -> std::io::Result<()> {
    let mut content = lines.join("\n");
    if !content.is_empty() {
        content.push('\n');
    }
    fs::write(path, content)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
