use std::path::Path;

use anyhow::Result;

use crate::models::DependencyGroup;

pub mod node;

/// Dependencies declared by one project's manifest, as written (operator
/// prefixes intact).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProjectManifest {
    pub dependencies: Vec<(String, String)>,
    pub dev_dependencies: Vec<(String, String)>,
}

impl ProjectManifest {
    pub fn group(&self, group: DependencyGroup) -> &[(String, String)] {
        match group {
            DependencyGroup::Runtime => &self.dependencies,
            DependencyGroup::Development => &self.dev_dependencies,
        }
    }
}

pub trait Analyzer {
    /// File name whose presence marks a directory as a project.
    fn manifest_name(&self) -> &str;

    fn analyze(&self, project: &Path) -> Result<ProjectManifest>;
}
