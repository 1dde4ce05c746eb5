//! Asset path resolution used by `ref:` directives.

use fnv::FnvHashMap;

use crate::filter::InstanceId;

/// Resolves a project-relative asset path to the id of its main asset.
pub trait AssetLookup {
    fn resolve_path_to_id(&self, path: &str) -> Option<InstanceId>;
}

impl<F> AssetLookup for F
where
    F: Fn(&str) -> Option<InstanceId>,
{
    fn resolve_path_to_id(&self, path: &str) -> Option<InstanceId> {
        self(path)
    }
}

/// Lookup that never resolves anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAssets;

impl AssetLookup for NoAssets {
    fn resolve_path_to_id(&self, _path: &str) -> Option<InstanceId> {
        None
    }
}

/// In-memory path to id table.
#[derive(Debug, Clone, Default)]
pub struct AssetCatalog {
    entries: FnvHashMap<String, InstanceId>,
}

impl AssetCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a path, returning the id it previously mapped to.
    pub fn insert(&mut self, path: impl Into<String>, id: InstanceId) -> Option<InstanceId> {
        self.entries.insert(path.into(), id)
    }

    pub fn remove(&mut self, path: &str) -> Option<InstanceId> {
        self.entries.remove(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl AssetLookup for AssetCatalog {
    fn resolve_path_to_id(&self, path: &str) -> Option<InstanceId> {
        self.entries.get(path).copied()
    }
}

impl<S: Into<String>> FromIterator<(S, InstanceId)> for AssetCatalog {
    fn from_iter<I: IntoIterator<Item = (S, InstanceId)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(path, id)| (path.into(), id))
                .collect(),
        }
    }
}
