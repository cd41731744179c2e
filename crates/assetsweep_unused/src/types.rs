use assetsweep_core::{AssetFile, SweepError};
use std::{collections::HashSet, path::PathBuf};

/// Unique root-relative keys referenced by the scanned sources
#[derive(Debug, Clone, Default)]
pub struct ReferenceSet {
    keys: HashSet<String>,
}

impl ReferenceSet {
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl<S: Into<String>> Extend<S> for ReferenceSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.keys.extend(iter.into_iter().map(Into::into));
    }
}

impl<S: Into<String>> FromIterator<S> for ReferenceSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::default();
        set.extend(iter);
        set
    }
}

/// Basenames that are never reported or removed
#[derive(Debug, Clone, Default)]
pub struct ExclusionList {
    basenames: HashSet<String>,
}

impl ExclusionList {
    pub fn new<S: AsRef<str>>(basenames: &[S]) -> Self {
        Self { basenames: basenames.iter().map(|b| b.as_ref().to_string()).collect() }
    }

    pub fn excludes(&self, asset: &AssetFile) -> bool {
        self.basenames.contains(asset.basename())
    }
}

#[derive(Debug)]
pub enum RemovalOutcome {
    Removed(AssetFile),
    /// Exclusion-listed, left on disk
    Kept(AssetFile),
    Failed(SweepError),
}

/// Per-asset results of a removal pass, in the order they were attempted
#[derive(Debug, Default)]
pub struct RemovalReport {
    pub outcomes: Vec<RemovalOutcome>,
}

impl RemovalReport {
    pub fn removed(&self) -> impl Iterator<Item = &AssetFile> {
        self.outcomes.iter().filter_map(|o| match o {
            RemovalOutcome::Removed(asset) => Some(asset),
            _ => None,
        })
    }

    pub fn kept(&self) -> impl Iterator<Item = &AssetFile> {
        self.outcomes.iter().filter_map(|o| match o {
            RemovalOutcome::Kept(asset) => Some(asset),
            _ => None,
        })
    }

    pub fn failed(&self) -> impl Iterator<Item = &SweepError> {
        self.outcomes.iter().filter_map(|o| match o {
            RemovalOutcome::Failed(err) => Some(err),
            _ => None,
        })
    }
}

#[derive(Debug)]
pub struct SweepResult {
    pub root: PathBuf,
    /// Unreferenced assets in enumeration order
    pub unused: Vec<AssetFile>,
    /// Present only when removal was requested
    pub removal: Option<RemovalReport>,
    /// Source files that could not be read or parsed
    pub skipped_sources: Vec<SweepError>,
    /// Sub-paths the walk could not read
    pub skipped_paths: Vec<String>,
    pub sources_scanned: usize,
    pub assets_scanned: usize,
    pub references_found: usize,
}

impl SweepResult {
    /// Whether any deletion failed
    pub fn has_failures(&self) -> bool {
        self.removal.as_ref().is_some_and(|r| r.failed().next().is_some())
    }
}
