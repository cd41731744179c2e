use assetsweep_core::AssetFile;
use log::{debug, trace};

use crate::types::{ExclusionList, ReferenceSet};

/// Assets whose key no reference names and whose basename is not excluded.
///
/// Keys are compared as exact strings. The result keeps the order of `assets`.
pub fn find_unused(
    assets: &[AssetFile],
    references: &ReferenceSet,
    exclusions: &ExclusionList,
) -> Vec<AssetFile> {
    let unused: Vec<AssetFile> = assets
        .iter()
        .filter(|asset| {
            if references.contains(&asset.key) {
                trace!("Referenced: {}", asset.key);
                return false;
            }
            if exclusions.excludes(asset) {
                trace!("Unreferenced but exclusion-listed: {}", asset.key);
                return false;
            }
            true
        })
        .cloned()
        .collect();
    debug!("{} of {} assets are unused", unused.len(), assets.len());
    unused
}
