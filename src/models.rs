use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Package name → cleaned version (no operator prefix).
pub type DependencyMap = BTreeMap<String, String>;

/// Which section of a manifest a dependency was declared in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyGroup {
    Runtime,
    Development,
}

impl std::fmt::Display for DependencyGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DependencyGroup::Runtime => write!(f, "dependencies"),
            DependencyGroup::Development => write!(f, "devDependencies"),
        }
    }
}

/// A directory or manifest the scan could not use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipRecord {
    pub path: PathBuf,
    pub reason: String,
}

impl std::fmt::Display for SkipRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.reason)
    }
}

/// The `list.json` artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    pub scan_date: String,
    pub vega_path: String,
    pub total_projects: usize,
    /// Versions carry a `^` prefix.
    pub dependencies: BTreeMap<String, String>,
    /// Versions carry a `^` prefix.
    pub dev_dependencies: BTreeMap<String, String>,
    pub summary: ReportSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub total_dependencies: usize,
    pub total_dev_dependencies: usize,
}
