use std::path::Path;

use crate::analyzer::Analyzer;
use crate::merge::{merge_dependencies, DependencyAccumulator};
use crate::models::{DependencyGroup, SkipRecord};

/// Merge one project's declared dependencies into `acc`.
///
/// A manifest that cannot be read or parsed leaves `acc` untouched and is
/// returned as a [`SkipRecord`] naming the manifest file.
pub fn process_project(
    analyzer: &dyn Analyzer,
    project: &Path,
    acc: &mut DependencyAccumulator,
) -> Result<(), SkipRecord> {
    let manifest = analyzer.analyze(project).map_err(|e| SkipRecord {
        path: project.join(analyzer.manifest_name()),
        reason: format!("{e:#}"),
    })?;

    for group in [DependencyGroup::Runtime, DependencyGroup::Development] {
        let entries = manifest
            .group(group)
            .iter()
            .map(|(name, version)| (name.as_str(), version.as_str()));
        merge_dependencies(entries, acc.group_mut(group));
    }

    Ok(())
}
