//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;

use crate::core::config::RebrandConfig;
use crate::core::render::{OutputFormat, RenderConfig};
use crate::core::rules::ReplacementRule;

/// rebrand - bulk, case-insensitive brand name substitution across a source tree.
#[derive(Parser, Debug)]
#[command(name = "rebrand")]
#[command(
    author,
    version,
    about,
    long_about = r#"rebrand walks a directory tree and rewrites brand names in place.

Only files whose name ends with an allowed extension are opened, and directories
whose path contains an exclusion marker are never entered. Rules are applied in
order, each one seeing the output of the previous one. A file is written only if
its content actually changed.

Defaults:
- rules: Kadraj\s*Panel=>Weey.NET, Fotoplan=>Weey.NET
- extensions: .ts,.tsx,.js,.jsx,.json,.md
- exclude: node_modules,.next,.git

Examples:
    rebrand
    rebrand --root ./site --summary
    rebrand --rule 'Acme\s*Corp=>Globex' --rule 'Acme=>Globex'
    rebrand --ext md,mdx --exclude node_modules,dist
"#
)]
pub struct Cli {
    /// Root directory to walk.
    #[arg(
        long,
        env = "REBRAND_ROOT",
        default_value = ".",
        value_name = "ROOT",
        long_help = "Root directory to walk (defaults to the current directory).\n\n\
Paths in the output are ROOT joined with the file's path below it."
    )]
    pub root: PathBuf,

    /// Replacement rule (PATTERN=>REPLACEMENT), repeatable.
    #[arg(
        long = "rule",
        value_name = "PATTERN=>REPLACEMENT",
        long_help = "Replacement rule, repeatable. Rules run in the order given.\n\n\
PATTERN is a case-insensitive regular expression. REPLACEMENT is inserted\n\
literally ($1 is not expanded). When any --rule is given, the built-in rules\n\
are replaced.\n\n\
Example: --rule 'Kadraj\\s*Panel=>Weey.NET'"
    )]
    pub rules: Vec<String>,

    /// Allowed file extensions (comma-separated).
    #[arg(
        long = "ext",
        value_name = "EXTS",
        value_delimiter = ',',
        long_help = "Comma-separated list of file name suffixes to process.\n\n\
Matching is case-sensitive. A leading '.' is added when missing.\n\
Default: .ts,.tsx,.js,.jsx,.json,.md"
    )]
    pub extensions: Vec<String>,

    /// Directory exclusion markers (comma-separated).
    #[arg(
        long = "exclude",
        value_name = "MARKERS",
        value_delimiter = ',',
        long_help = "Comma-separated list of exclusion markers.\n\n\
A directory is skipped, with everything below it, when its path contains any\n\
marker as a substring (so '.git' also skips '.github').\n\
Default: node_modules,.next,.git"
    )]
    pub exclude: Vec<String>,

    /// Output format (text/jsonl).
    #[arg(
        long,
        default_value = "text",
        value_name = "FORMAT",
        long_help = "Select the output format.\n\n\
Supported values:\n\
- text (default): 'Updated: <path>' lines\n\
- jsonl: one JSON event per line"
    )]
    pub format: String,

    /// Print a run summary to stderr.
    #[arg(long)]
    pub summary: bool,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,

    /// Quiet mode (do not print updated files).
    #[arg(
        short,
        long,
        long_help = "Do not print 'Updated' lines. Per-file errors are still reported."
    )]
    pub quiet: bool,

    /// Verbose mode (report skipped directories and walk errors).
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Build the run configuration, validating rule syntax
    pub fn config(&self) -> Result<RebrandConfig> {
        let rules = self
            .rules
            .iter()
            .map(|r| r.parse::<ReplacementRule>())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(RebrandConfig::with_root(self.root.clone())
            .rules(rules)
            .extensions(self.extensions.clone())
            .exclude_markers(self.exclude.clone()))
    }

    /// Build the render configuration
    pub fn render_config(&self) -> Result<RenderConfig> {
        let format: OutputFormat = self.format.parse().map_err(anyhow::Error::msg)?;
        Ok(RenderConfig {
            format,
            quiet: self.quiet,
            verbose: self.verbose,
            out_color: !self.no_color && std::io::stdout().is_terminal(),
            err_color: !self.no_color && std::io::stderr().is_terminal(),
        })
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = cli.config()?;
    let render = cli.render_config()?;

    crate::flows::rebrand::run_rebrand(&config, render, cli.summary)
}
