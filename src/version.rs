//! Version string handling for declared dependency ranges.
//!
//! Versions are compared by their dot-separated numeric components only;
//! this is not a semver implementation.

use std::cmp::Ordering;

/// Characters that may lead a declared range, e.g. `^1.2.3` or `>=3.1.0`.
const OPERATOR_PREFIXES: [char; 5] = ['^', '~', '>', '=', '<'];

/// Strip a single leading comparison operator from `version`.
///
/// Only one character is removed, so `>=3.1.0` becomes `=3.1.0`.
pub fn normalize(version: &str) -> &str {
    match version.chars().next() {
        Some(c) if OPERATOR_PREFIXES.contains(&c) => &version[c.len_utf8()..],
        _ => version,
    }
}

/// Split a cleaned version into its numeric components.
///
/// Each component contributes its leading digit run; anything without one
/// (`x`, `*`, `beta`) counts as `0`.
pub fn components(version: &str) -> Vec<u64> {
    version
        .split('.')
        .map(|part| {
            let digits: String = part.chars().take_while(|c| c.is_ascii_digit()).collect();
            if digits.is_empty() {
                0
            } else {
                digits.parse().unwrap_or(u64::MAX)
            }
        })
        .collect()
}

/// Order two cleaned versions component-wise, padding the shorter with zeros.
pub fn compare(a: &str, b: &str) -> Ordering {
    let left = components(a);
    let right = components(b);
    let len = left.len().max(right.len());

    for i in 0..len {
        let l = left.get(i).copied().unwrap_or(0);
        let r = right.get(i).copied().unwrap_or(0);
        match l.cmp(&r) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

/// `true` iff `candidate` is strictly higher than `current`.
pub fn is_higher(candidate: &str, current: &str) -> bool {
    compare(candidate, current) == Ordering::Greater
}
