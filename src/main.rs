//! `vega-deps` — aggregate the dependencies declared by every project in a folder tree.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load config and resolve the scan root and report path ([`config::load_config`]).
//! 3. Find project directories ([`finder::find_projects`]).
//! 4. Merge each project's manifest into the runtime and dev mappings ([`processor`]).
//! 5. Build and write `list.json` ([`report::json`]).
//! 6. Print the summary ([`report::terminal`]).
//! 7. Exit `0`, or `1` on any fatal error (missing root, unwritable report, bad config).

mod analyzer;
mod cli;
mod config;
mod finder;
mod merge;
mod models;
mod processor;
mod report;
mod scan;
mod version;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use cli::Cli;
use config::{default_output_path, load_config};
use scan::ScanOptions;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let work_dir = std::env::current_dir()?;
    let config = load_config(&work_dir, cli.config.as_deref())?;

    // CLI flags win over config values
    let root = cli
        .root
        .or(config.root)
        .unwrap_or_else(|| PathBuf::from("."));
    let output = match cli.output.or(config.output) {
        Some(path) => path,
        None => default_output_path()?,
    };

    let options = ScanOptions {
        root,
        output,
        manifest: config.manifest,
        quiet: cli.quiet,
    };

    let outcome = scan::run(&options)?;

    report::terminal::render(&outcome, &options.output, cli.verbose, cli.quiet);

    Ok(())
}
