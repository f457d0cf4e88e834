//! Console output
//!
//! Renders run events either as plain log lines (`Updated: <path>`) or as
//! JSON Lines. Results go to stdout, diagnostics to stderr.

use colored::{Color, Colorize};
use serde::Serialize;
use std::io::{self, Stderr, Stdout, Write};
use std::path::Path;

use crate::core::model::RunReport;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Jsonl,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "jsonl" => Ok(OutputFormat::Jsonl),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub quiet: bool,
    pub verbose: bool,
    /// Colorize labels written to stdout
    pub out_color: bool,
    /// Colorize labels written to stderr
    pub err_color: bool,
}

/// A single reportable event
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event<'a> {
    Updated {
        path: String,
    },
    Error {
        path: String,
        message: &'a str,
    },
    SkippedDir {
        path: String,
    },
    WalkError {
        message: &'a str,
    },
    Summary {
        #[serde(flatten)]
        report: &'a RunReport,
    },
}

/// Writes events to an output and a diagnostics stream
pub struct Reporter<O: Write = Stdout, E: Write = Stderr> {
    config: RenderConfig,
    out: O,
    err: E,
}

impl Reporter {
    /// Reporter bound to the process stdout/stderr
    pub fn stdio(config: RenderConfig) -> Self {
        Self::new(config, io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> Reporter<O, E> {
    pub fn new(config: RenderConfig, out: O, err: E) -> Self {
        Self { config, out, err }
    }

    /// A file was rewritten
    pub fn updated(&mut self, path: &Path) -> io::Result<()> {
        if self.config.quiet {
            return Ok(());
        }
        let path = path.display().to_string();
        match self.config.format {
            OutputFormat::Text => {
                let label = paint("Updated:", Color::Green, self.config.out_color);
                writeln!(self.out, "{} {}", label, path)
            }
            OutputFormat::Jsonl => self.emit_json(&Event::Updated { path }),
        }
    }

    /// A file could not be processed
    pub fn error(&mut self, path: &Path, message: &str) -> io::Result<()> {
        let path = path.display().to_string();
        match self.config.format {
            OutputFormat::Text => {
                let label = paint("Error processing", Color::Red, self.config.err_color);
                writeln!(self.err, "{} {}: {}", label, path, message)
            }
            OutputFormat::Jsonl => self.emit_json(&Event::Error {
                path,
                message,
            }),
        }
    }

    /// A directory was pruned (verbose only)
    pub fn skipped_dir(&mut self, path: &Path) -> io::Result<()> {
        if !self.config.verbose {
            return Ok(());
        }
        let path = path.display().to_string();
        match self.config.format {
            OutputFormat::Text => writeln!(self.err, "Skipped: {}", path),
            OutputFormat::Jsonl => self.emit_json(&Event::SkippedDir { path }),
        }
    }

    /// A directory below the root could not be read (verbose only)
    pub fn walk_error(&mut self, message: &str) -> io::Result<()> {
        if !self.config.verbose {
            return Ok(());
        }
        match self.config.format {
            OutputFormat::Text => {
                let label = paint("Walk error:", Color::Yellow, self.config.err_color);
                writeln!(self.err, "{} {}", label, message)
            }
            OutputFormat::Jsonl => self.emit_json(&Event::WalkError { message }),
        }
    }

    /// Run summary, always on stderr
    pub fn summary(&mut self, report: &RunReport) -> io::Result<()> {
        match self.config.format {
            OutputFormat::Text => {
                writeln!(self.err, "Summary:")?;
                writeln!(self.err, "   Files: {}", report.visited)?;
                writeln!(self.err, "   Updated: {}", report.updated)?;
                writeln!(self.err, "   Unchanged: {}", report.unchanged)?;
                writeln!(self.err, "   Failed: {}", report.failed)?;
                writeln!(self.err, "   Skipped dirs: {}", report.skipped_dirs)?;
                if report.walk_errors > 0 {
                    writeln!(self.err, "   Walk errors: {}", report.walk_errors)?;
                }
                Ok(())
            }
            OutputFormat::Jsonl => {
                let line = serde_json::to_string(&Event::Summary { report })?;
                writeln!(self.err, "{}", line)
            }
        }
    }

    /// Give back the underlying streams
    #[allow(dead_code)]
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }

    fn emit_json(&mut self, event: &Event<'_>) -> io::Result<()> {
        let line = serde_json::to_string(event)?;
        writeln!(self.out, "{}", line)
    }
}

fn paint(label: &str, color: Color, enabled: bool) -> String {
    if enabled {
        label.color(color).bold().to_string()
    } else {
        label.to_string()
    }
}
