//! rebrand - bulk brand name substitution across a source tree
//!
//! rebrand provides:
//! - Directory walking with substring-based directory exclusion
//! - Extension allow-listing
//! - Ordered, case-insensitive regex replacement with literal substitution
//! - Write-only-if-changed file updates with per-file error isolation

use anyhow::Result;
use clap::Parser;

mod backends;
mod cli;
mod core;
mod flows;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
