use ignore::WalkBuilder;
use log::{debug, trace, warn};
use std::{fs, path::PathBuf};

use crate::{error::SweepError, paths::root_key, types::AssetFile};

pub struct CollectorConfig {
    pub root: PathBuf,
    pub source_extensions: Vec<String>,
    pub asset_extensions: Vec<String>,
    pub excluded_dirs: Vec<String>,
}

/// Files found under the root, in walk order
#[derive(Debug, Default)]
pub struct Collection {
    pub sources: Vec<PathBuf>,
    pub assets: Vec<AssetFile>,
    /// Sub-paths the walk could not read, one message each
    pub skipped: Vec<String>,
}

/// Walk `cfg.root` and sort files into sources and assets.
///
/// Ignore files and hidden-file rules are not applied: every file under the
/// root counts, except those inside an excluded directory. Entries are visited
/// in file-name order so the result is stable across runs.
///
/// An unreadable root is a setup error. Unreadable entries below the root are
/// logged and listed in [`Collection::skipped`], not fatal.
pub fn collect_files(cfg: &CollectorConfig) -> Result<Collection, SweepError> {
    let root = &cfg.root;
    debug!("Walking directory tree from root: {}", root.display());
    fs::read_dir(root).map_err(|source| SweepError::Setup { path: root.clone(), source })?;

    let excluded = cfg.excluded_dirs.clone();
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(move |dent| {
            let is_dir = dent.file_type().is_some_and(|ft| ft.is_dir());
            let name = dent.file_name().to_str().unwrap_or_default();
            let keep = dent.depth() == 0 || !is_dir || !excluded.iter().any(|e| e == name);
            if !keep {
                trace!("Pruning excluded directory: {}", dent.path().display());
            }
            keep
        })
        .build();

    let mut collection = Collection::default();
    for res in walker {
        let dent = match res {
            Ok(dent) => dent,
            Err(e) => {
                warn!("Skipping unreadable path: {}", e);
                collection.skipped.push(e.to_string());
                continue;
            }
        };
        if !dent.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let p = dent.path();
        let Some(ext) = p.extension().and_then(|e| e.to_str()) else {
            continue;
        };

        if cfg.source_extensions.iter().any(|e| e == ext) {
            trace!("Found source file: {}", p.display());
            collection.sources.push(p.to_path_buf());
        } else if cfg.asset_extensions.iter().any(|e| e == ext) {
            let Some(key) = root_key(root, p) else {
                continue;
            };
            trace!("Found asset file: {}", key);
            collection.assets.push(AssetFile { path: p.to_path_buf(), key });
        }
    }

    debug!(
        "Collected {} source files and {} assets ({} skipped)",
        collection.sources.len(),
        collection.assets.len(),
        collection.skipped.len()
    );
    Ok(collection)
}
