use std::collections::BTreeMap;
use std::path::Path;

use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};

use crate::models::{DependencyGroup, SkipRecord};
use crate::scan::ScanOutcome;

/// Print a recoverable problem to stderr.
pub fn warn(skip: &SkipRecord) {
    eprintln!("{} {}", "warning:".yellow().bold(), skip);
}

/// Render the completion summary for a finished scan.
pub fn render(outcome: &ScanOutcome, output: &Path, verbose: bool, quiet: bool) {
    let report = &outcome.report;
    let skipped = &outcome.skipped;

    if quiet {
        println!(
            "Projects: {}  Dependencies: {}  Dev: {}  Skipped: {}  Report: {}",
            report.total_projects,
            report.summary.total_dependencies.to_string().green(),
            report.summary.total_dev_dependencies.to_string().cyan(),
            skipped.len().to_string().yellow(),
            output.display(),
        );
        return;
    }

    if verbose {
        println!("\n {} ({}):", "projects".bold(), outcome.projects.len());
        for project in &outcome.projects {
            println!("   {}", project.display());
        }
        render_group(DependencyGroup::Runtime, &report.dependencies);
        render_group(DependencyGroup::Development, &report.dev_dependencies);
    }

    println!(" ┌────────────────────────────────────────────────────┐");
    println!(" │  {:<48} │", "SUMMARY".bold());
    println!(" │  {:<48} │", format!("Projects scanned   : {}", report.total_projects));
    println!(
        " │  {:<48} │",
        format!("Dependencies       : {}", report.summary.total_dependencies)
    );
    println!(
        " │  {:<48} │",
        format!("Dev dependencies   : {}", report.summary.total_dev_dependencies)
    );
    println!(" │  {:<48} │", format!("Skipped            : {}", skipped.len()));
    println!(" └────────────────────────────────────────────────────┘\n");

    println!(" {} Report written to {}", "✓".green(), output.display());
}

fn render_group(group: DependencyGroup, deps: &BTreeMap<String, String>) {
    if deps.is_empty() {
        return;
    }

    println!("\n {} ({}):\n", group.to_string().bold(), deps.len());

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Name").add_attribute(Attribute::Bold),
            Cell::new("Version").add_attribute(Attribute::Bold),
        ]);

    for (name, version) in deps {
        table.add_row(vec![Cell::new(name), Cell::new(version)]);
    }

    println!("{}\n", table);
}
