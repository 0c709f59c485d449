use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::models::SkipRecord;

/// Collect every directory below `root` that directly contains `manifest`.
///
/// A directory holding a manifest is a leaf: nothing beneath it is visited.
/// `root` itself is never treated as a project. Entries that cannot be read
/// are recorded in `skipped`; their siblings are still visited. Symlinks are
/// not followed.
pub fn find_projects(root: &Path, manifest: &str, skipped: &mut Vec<SkipRecord>) -> Vec<PathBuf> {
    let mut projects = Vec::new();
    let mut it = WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter();

    while let Some(next) = it.next() {
        let entry = match next {
            Ok(entry) => entry,
            Err(e) => {
                skipped.push(SkipRecord {
                    path: e.path().unwrap_or(root).to_path_buf(),
                    reason: format!("cannot read directory: {e}"),
                });
                continue;
            }
        };

        if !entry.file_type().is_dir() {
            continue;
        }

        if entry.path().join(manifest).is_file() {
            projects.push(entry.into_path());
            it.skip_current_dir();
        }
    }

    projects
}
