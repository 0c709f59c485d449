use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

use super::ProjectManifest;
use crate::models::DependencyGroup;

pub const DEFAULT_MANIFEST: &str = "package.json";

/// Reads the `dependencies` / `devDependencies` sections of a `package.json`.
pub struct NodeAnalyzer {
    manifest: String,
}

impl Default for NodeAnalyzer {
    fn default() -> Self {
        Self::with_manifest(DEFAULT_MANIFEST)
    }
}

impl NodeAnalyzer {
    /// Use a manifest file name other than `package.json`.
    pub fn with_manifest(manifest: impl Into<String>) -> Self {
        Self {
            manifest: manifest.into(),
        }
    }
}

impl super::Analyzer for NodeAnalyzer {
    fn manifest_name(&self) -> &str {
        &self.manifest
    }

    fn analyze(&self, project: &Path) -> Result<ProjectManifest> {
        parse_package_json(&project.join(&self.manifest))
    }
}

fn parse_package_json(path: &Path) -> Result<ProjectManifest> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let json: Value = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse {}", path.display()))?;

    Ok(ProjectManifest {
        dependencies: section(&json, DependencyGroup::Runtime),
        dev_dependencies: section(&json, DependencyGroup::Development),
    })
}

/// Entries of one dependency section. Missing or non-object sections yield
/// nothing; non-string versions are dropped.
fn section(json: &Value, group: DependencyGroup) -> Vec<(String, String)> {
    let key = group.to_string();
    json.get(key.as_str())
        .and_then(|v| v.as_object())
        .map(|pkgs| {
            pkgs.iter()
                .filter_map(|(name, version)| {
                    version.as_str().map(|v| (name.clone(), v.to_string()))
                })
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::Analyzer;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_parse_package_json() {
        let json = r#"{
  "name": "my-app",
  "dependencies": {
    "express": "^4.18.2",
    "lodash": "^4.17.21"
  },
  "devDependencies": {
    "jest": "^29.0.0"
  }
}"#;
        let mut f = NamedTempFile::new().unwrap();
        write!(f, "{}", json).unwrap();
        let manifest = parse_package_json(f.path()).unwrap();
        assert_eq!(manifest.dependencies.len(), 2);
        assert_eq!(
            manifest.dev_dependencies,
            vec![("jest".to_string(), "^29.0.0".to_string())]
        );
    }

    #[test]
    fn test_missing_sections_are_empty() {
        let mut f = NamedTempFile::new().unwrap();
        write!(f, r#"{{"name": "bare", "dependencies": "oops"}}"#).unwrap();
        let manifest = parse_package_json(f.path()).unwrap();
        assert_eq!(manifest, ProjectManifest::default());
    }

    #[test]
    fn test_non_string_versions_are_dropped() {
        let mut f = NamedTempFile::new().unwrap();
        write!(f, r#"{{"dependencies": {{"a": "1.0.0", "b": 2, "c": null}}}}"#).unwrap();
        let manifest = parse_package_json(f.path()).unwrap();
        assert_eq!(
            manifest.dependencies,
            vec![("a".to_string(), "1.0.0".to_string())]
        );
    }

    #[test]
    fn test_malformed_json_names_the_file() {
        let mut f = NamedTempFile::new().unwrap();
        write!(f, "{{ not json").unwrap();
        let err = parse_package_json(f.path()).unwrap_err();
        assert!(format!("{err:#}").contains(&f.path().display().to_string()));
    }

    #[test]
    fn test_analyzer_uses_configured_manifest() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join("deps.json"),
            r#"{"dependencies": {"left-pad": "~1.3.0"}}"#,
        )
        .unwrap();

        let analyzer = NodeAnalyzer::with_manifest("deps.json");
        assert_eq!(analyzer.manifest_name(), "deps.json");
        let manifest = analyzer.analyze(tmp.path()).unwrap();
        assert_eq!(manifest.group(DependencyGroup::Runtime).len(), 1);
        assert!(NodeAnalyzer::default().analyze(tmp.path()).is_err());
    }
}
