//! The scan pipeline: validate root → discover → process → build → write.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::Utc;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use crate::analyzer::node::NodeAnalyzer;
use crate::analyzer::Analyzer;
use crate::finder::find_projects;
use crate::merge::DependencyAccumulator;
use crate::models::{ScanReport, SkipRecord};
use crate::processor::process_project;
use crate::report::json::{build_report, write_report};
use crate::report::terminal::warn;

/// Everything one scan needs, resolved before it starts.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub root: PathBuf,
    pub output: PathBuf,
    pub manifest: String,
    pub quiet: bool,
}

#[derive(Debug)]
pub struct ScanOutcome {
    pub report: ScanReport,
    pub projects: Vec<PathBuf>,
    pub skipped: Vec<SkipRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    ValidatingRoot,
    Discovering,
    Processing,
    Building,
    Writing,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::ValidatingRoot => write!(f, "validating root"),
            Stage::Discovering => write!(f, "discovering projects"),
            Stage::Processing => write!(f, "processing projects"),
            Stage::Building => write!(f, "building report"),
            Stage::Writing => write!(f, "writing report"),
        }
    }
}

/// Run a full scan and write the report to `options.output`.
///
/// Unreadable directories and broken manifests are reported as warnings and
/// collected in [`ScanOutcome::skipped`]. Any returned error is fatal and
/// names the stage it happened in.
pub fn run(options: &ScanOptions) -> Result<ScanOutcome> {
    let mut stage = Stage::ValidatingRoot;
    execute(options, &mut stage).with_context(|| format!("failed while {stage}"))
}

fn execute(options: &ScanOptions, stage: &mut Stage) -> Result<ScanOutcome> {
    let root = validate_root(&options.root)?;

    if !options.quiet {
        eprintln!("{} Scanning {}", "→".cyan(), root.display());
    }

    *stage = Stage::Discovering;
    let analyzer = NodeAnalyzer::with_manifest(options.manifest.as_str());
    let mut skipped = Vec::new();
    let projects = find_projects(&root, analyzer.manifest_name(), &mut skipped);
    skipped.iter().for_each(warn);

    if !options.quiet {
        eprintln!("{} Found {} projects", "→".cyan(), projects.len());
    }

    // One project at a time; a broken manifest only costs that project.
    *stage = Stage::Processing;
    let mut acc = DependencyAccumulator::new();
    let pb = progress_bar(projects.len(), options.quiet);
    for project in &projects {
        let name = project.strip_prefix(&root).unwrap_or(project.as_path());
        print_line(&pb, options.quiet, &format!("  {} {}", "•".dimmed(), name.display()));
        if let Err(skip) = process_project(&analyzer, project, &mut acc) {
            pb.suspend(|| warn(&skip));
            skipped.push(skip);
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    *stage = Stage::Building;
    let report = build_report(&acc, &root, projects.len(), Utc::now());

    *stage = Stage::Writing;
    write_report(&report, &options.output)?;

    Ok(ScanOutcome {
        report,
        projects,
        skipped,
    })
}

fn validate_root(root: &Path) -> Result<PathBuf> {
    if !root.exists() {
        bail!("root path {} does not exist", root.display());
    }
    if !root.is_dir() {
        bail!("root path {} is not a directory", root.display());
    }
    Ok(root.canonicalize().unwrap_or_else(|_| root.to_path_buf()))
}

fn progress_bar(len: usize, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len}")
    {
        pb.set_style(style.progress_chars("#>-"));
    }
    pb
}

/// Per-project progress line; goes through the bar when one is drawn.
fn print_line(pb: &ProgressBar, quiet: bool, line: &str) {
    if quiet {
        return;
    }
    if pb.is_hidden() {
        eprintln!("{line}");
    } else {
        pb.println(line);
    }
}
