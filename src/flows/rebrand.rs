//! Rebrand flow
//!
//! Walks the tree, filters by extension, applies the rule set to each file and
//! writes back only the files whose content changed. A failing file is logged
//! and skipped; only root and rule errors abort the run.

use anyhow::Result;
use std::borrow::Cow;
use std::io::Write;
use std::path::Path;

use crate::backends::walk::{walk_files, WalkEntry};
use crate::core::config::RebrandConfig;
use crate::core::file_io::{read_text, write_text};
use crate::core::model::{FileOutcome, RebrandError, RunReport};
use crate::core::paths::has_allowed_extension;
use crate::core::render::{RenderConfig, Reporter};
use crate::core::rules::RuleSet;

/// Process a single file: read, substitute, write if changed
pub fn rebrand_file(path: &Path, rules: &RuleSet) -> Result<FileOutcome, RebrandError> {
    let content = read_text(path)?;

    match rules.apply(&content) {
        Cow::Borrowed(_) => Ok(FileOutcome::Unchanged),
        Cow::Owned(updated) if updated == content => Ok(FileOutcome::Unchanged),
        Cow::Owned(updated) => {
            write_text(path, &updated)?;
            Ok(FileOutcome::Updated)
        }
    }
}

/// Rebrand every qualifying file under the configured root
pub fn rebrand_tree<O: Write, E: Write>(
    config: &RebrandConfig,
    reporter: &mut Reporter<O, E>,
) -> Result<RunReport> {
    // Validate every pattern before touching the filesystem
    let rules = RuleSet::compile(&config.rules)?;
    let walker = walk_files(&config.root, &config.exclude_markers)?;

    let mut report = RunReport::default();

    for entry in walker {
        let path = match entry {
            WalkEntry::File(path) => path,
            WalkEntry::SkippedDir(path) => {
                report.skipped_dirs += 1;
                reporter.skipped_dir(&path)?;
                continue;
            }
            WalkEntry::Error(message) => {
                report.walk_errors += 1;
                reporter.walk_error(&message)?;
                continue;
            }
        };

        if !has_allowed_extension(&path, &config.extensions) {
            continue;
        }

        let outcome = match rebrand_file(&path, &rules) {
            Ok(outcome) => outcome,
            Err(e) if e.is_per_file() => FileOutcome::Failed(e),
            Err(e) => return Err(e.into()),
        };

        match &outcome {
            FileOutcome::Updated => reporter.updated(&path)?,
            FileOutcome::Failed(e) => {
                reporter.error(e.path().unwrap_or(path.as_path()), &e.to_string())?
            }
            FileOutcome::Unchanged => {}
        }

        report.record(&outcome);
    }

    Ok(report)
}

/// Run the rebrand command
pub fn run_rebrand(config: &RebrandConfig, render: RenderConfig, show_summary: bool) -> Result<()> {
    let mut reporter = Reporter::stdio(render);
    let report = rebrand_tree(config, &mut reporter)?;

    if show_summary {
        reporter.summary(&report)?;
    }

    Ok(())
}
