use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};

use crate::merge::DependencyAccumulator;
use crate::models::{DependencyMap, ReportSummary, ScanReport};

/// Assemble the report from the accumulated mappings.
///
/// `total_projects` comes from the discovery pass; the tree is not walked again.
pub fn build_report(
    acc: &DependencyAccumulator,
    root: &Path,
    total_projects: usize,
    scan_date: DateTime<Utc>,
) -> ScanReport {
    let dependencies = caret_prefixed(&acc.runtime);
    let dev_dependencies = caret_prefixed(&acc.development);

    ScanReport {
        scan_date: scan_date.to_rfc3339_opts(SecondsFormat::Millis, true),
        vega_path: root.display().to_string(),
        total_projects,
        summary: ReportSummary {
            total_dependencies: dependencies.len(),
            total_dev_dependencies: dev_dependencies.len(),
        },
        dependencies,
        dev_dependencies,
    }
}

fn caret_prefixed(map: &DependencyMap) -> BTreeMap<String, String> {
    map.iter()
        .map(|(name, version)| (name.clone(), format!("^{version}")))
        .collect()
}

/// Write `report` as indented JSON to `path`, replacing any existing file.
pub fn write_report(report: &ScanReport, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let mut body = serde_json::to_string_pretty(report)?;
    body.push('\n');
    std::fs::write(path, body).with_context(|| format!("failed to write {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::merge_dependencies;
    use crate::version::normalize;
    use chrono::TimeZone;
    use serde_json::Value;
    use tempfile::TempDir;

    fn sample_acc() -> DependencyAccumulator {
        let mut acc = DependencyAccumulator::new();
        merge_dependencies([("lib", "^1.2.0"), ("lib", "1.5.0")], &mut acc.runtime);
        merge_dependencies([("react", ">=18.0")], &mut acc.runtime);
        merge_dependencies([("jest", "~29.0.0")], &mut acc.development);
        acc
    }

    fn fixed_date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap()
    }

    #[test]
    fn test_build_report_prefixes_and_counts() {
        let report = build_report(&sample_acc(), Path::new("/srv/vega"), 7, fixed_date());

        assert_eq!(report.scan_date, "2024-03-01T12:30:00.000Z");
        assert_eq!(report.vega_path, "/srv/vega");
        assert_eq!(report.total_projects, 7);
        assert_eq!(report.dependencies["lib"], "^1.5.0");
        assert_eq!(report.dependencies["react"], "^=18.0");
        assert_eq!(report.dev_dependencies["jest"], "^29.0.0");
        assert_eq!(report.summary.total_dependencies, 2);
        assert_eq!(report.summary.total_dev_dependencies, 1);
    }

    #[test]
    fn test_output_versions_normalize_back_to_stored() {
        let acc = sample_acc();
        let report = build_report(&acc, Path::new("/"), 1, fixed_date());

        for (name, version) in &report.dependencies {
            assert_eq!(normalize(version), acc.runtime[name]);
        }
        for (name, version) in &report.dev_dependencies {
            assert_eq!(normalize(version), acc.development[name]);
        }
    }

    #[test]
    fn test_write_report_shape() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("nested/list.json");
        let report = build_report(&sample_acc(), Path::new("/srv/vega"), 2, fixed_date());

        write_report(&report, &out).unwrap();

        let text = std::fs::read_to_string(&out).unwrap();
        assert!(text.starts_with("{\n  \"scanDate\""));
        let json: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["vegaPath"], "/srv/vega");
        assert_eq!(json["totalProjects"], 2);
        assert_eq!(json["dependencies"]["lib"], "^1.5.0");
        assert_eq!(json["devDependencies"]["jest"], "^29.0.0");
        assert_eq!(json["summary"]["totalDependencies"], 2);
        assert_eq!(json["summary"]["totalDevDependencies"], 1);
    }

    #[test]
    fn test_write_report_overwrites() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("list.json");
        std::fs::write(&out, "stale contents that are much longer than nothing").unwrap();

        let report = build_report(&DependencyAccumulator::new(), tmp.path(), 0, fixed_date());
        write_report(&report, &out).unwrap();

        let json: Value = serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(json["totalProjects"], 0);
        assert!(json["dependencies"].as_object().unwrap().is_empty());
    }
}
