use indexmap::IndexMap;

/// Versions collected per package name.
///
/// Names iterate in first-insertion order. Each name keeps every version
/// put for it, duplicates included, in insertion order. The accumulator is
/// owned by the caller and may be fed by several builds, e.g. one per
/// project of a monorepo.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyAccumulator {
    versions: IndexMap<String, Vec<String>>,
}

impl DependencyAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `version` to the list for `name`.
    pub fn put(&mut self, name: impl Into<String>, version: impl Into<String>) {
        self.versions
            .entry(name.into())
            .or_default()
            .push(version.into());
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.versions.get(name).map(Vec::as_slice)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.versions.contains_key(name)
    }

    /// Number of distinct package names.
    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Total number of versions across all names.
    pub fn version_count(&self) -> usize {
        self.versions.values().map(Vec::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.versions
            .iter()
            .map(|(name, versions)| (name.as_str(), versions.as_slice()))
    }
}
