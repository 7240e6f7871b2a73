use std::collections::BTreeSet;

use serde::Serialize;

/// Set difference between a base key set and a target key set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KeyDiff {
    /// Keys in the base but not in the target, sorted ascending.
    pub missing: Vec<String>,
    /// Keys in the target but not in the base, sorted ascending.
    pub extra: Vec<String>,
}

impl KeyDiff {
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty()
    }
}

/// Compare two key collections with set semantics.
///
/// Order and repeats in the inputs are irrelevant. Both output lists are
/// sorted lexicographically and contain each key once.
pub fn compare_keys<B, T>(base_keys: B, target_keys: T) -> KeyDiff
where
    B: IntoIterator,
    B::Item: AsRef<str>,
    T: IntoIterator,
    T::Item: AsRef<str>,
{
    let base: BTreeSet<String> = key_set(base_keys);
    let target: BTreeSet<String> = key_set(target_keys);

    KeyDiff {
        missing: base.difference(&target).cloned().collect(),
        extra: target.difference(&base).cloned().collect(),
    }
}

/// Sorted, de-duplicated copy of `keys`.
pub fn key_set<I>(keys: I) -> BTreeSet<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    keys.into_iter().map(|k| k.as_ref().to_string()).collect()
}
