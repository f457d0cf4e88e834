//! Error taxonomy and run results
//!
//! Per-file failures are recovered by the orchestrator; traversal and
//! configuration failures are fatal and surface through `anyhow` to `main`.

use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while renaming a tree
#[derive(Debug, Error)]
pub enum RebrandError {
    /// The root directory does not exist
    #[error("root directory not found: {}", .0.display())]
    RootNotFound(PathBuf),

    /// The walk could not read a directory
    #[error("cannot walk {}: {message}", .path.display())]
    Walk { path: PathBuf, message: String },

    /// A replacement pattern failed to compile
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A rule string could not be split into pattern and replacement
    #[error("invalid rule `{0}` (expected PATTERN=>REPLACEMENT)")]
    InvalidRule(String),

    /// Reading a file failed
    #[error("{source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File content is not valid UTF-8
    #[error("stream did not contain valid UTF-8 at byte {valid_up_to}")]
    Decode { path: PathBuf, valid_up_to: usize },

    /// Writing a file failed
    #[error("{source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RebrandError {
    /// The path the error is about, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            RebrandError::RootNotFound(path)
            | RebrandError::Walk { path, .. }
            | RebrandError::Read { path, .. }
            | RebrandError::Decode { path, .. }
            | RebrandError::Write { path, .. } => Some(path),
            RebrandError::InvalidPattern { .. } | RebrandError::InvalidRule(_) => None,
        }
    }

    /// Whether the error only affects a single file
    pub fn is_per_file(&self) -> bool {
        matches!(
            self,
            RebrandError::Read { .. } | RebrandError::Decode { .. } | RebrandError::Write { .. }
        )
    }
}

/// What happened to a single qualifying file
#[derive(Debug)]
pub enum FileOutcome {
    Updated,
    Unchanged,
    Failed(RebrandError),
}

/// Counters collected over one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Files that passed the extension filter
    pub visited: usize,
    pub updated: usize,
    pub unchanged: usize,
    pub failed: usize,

    /// Directories pruned by an exclusion marker
    pub skipped_dirs: usize,

    /// Non-fatal errors below the root
    pub walk_errors: usize,
}

impl RunReport {
    /// Record the outcome of one file
    pub fn record(&mut self, outcome: &FileOutcome) {
        self.visited += 1;
        match outcome {
            FileOutcome::Updated => self.updated += 1,
            FileOutcome::Unchanged => self.unchanged += 1,
            FileOutcome::Failed(_) => self.failed += 1,
        }
    }
}
