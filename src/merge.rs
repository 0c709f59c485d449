use crate::models::{DependencyGroup, DependencyMap};
use crate::version::{is_higher, normalize};

/// Fold `(name, raw version)` entries into `target`, keeping the highest
/// cleaned version per name. Ties keep the version already stored.
pub fn merge_dependencies<'a, I>(entries: I, target: &mut DependencyMap)
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    for (name, raw) in entries {
        let cleaned = normalize(raw);
        match target.get_mut(name) {
            Some(stored) => {
                if is_higher(cleaned, stored) {
                    *stored = cleaned.to_string();
                }
            }
            None => {
                target.insert(name.to_string(), cleaned.to_string());
            }
        }
    }
}

/// The two independent mappings built up across a scan.
#[derive(Debug, Default, Clone)]
pub struct DependencyAccumulator {
    pub runtime: DependencyMap,
    pub development: DependencyMap,
}

impl DependencyAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn group_mut(&mut self, group: DependencyGroup) -> &mut DependencyMap {
        match group {
            DependencyGroup::Runtime => &mut self.runtime,
            DependencyGroup::Development => &mut self.development,
        }
    }
}
