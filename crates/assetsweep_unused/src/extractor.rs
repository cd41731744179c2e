use assetsweep_core::{SourceFile, SweepError, resolve_reference};
use log::trace;
use std::path::Path;

use crate::{patterns::ReferencePatterns, template::extractor_for};

/// Root-relative keys of every asset `source` references, in order of
/// appearance. Duplicates are left for the caller's set to absorb.
///
/// A component whose template cannot be isolated is a parse error. Finding no
/// references is not an error.
pub fn extract_references(
    root: &Path,
    source: &SourceFile,
    patterns: &ReferencePatterns,
) -> Result<Vec<String>, SweepError> {
    let region = extractor_for(source.kind).scan_region(&source.content).map_err(|e| {
        SweepError::Parse { path: source.path.clone(), reason: e.to_string() }
    })?;

    let Some(region) = region else {
        trace!("No scannable region in {}", source.path.display());
        return Ok(Vec::new());
    };

    let keys = patterns
        .find_references(region)
        .into_iter()
        .filter_map(|(kind, raw)| {
            let key = resolve_reference(root, &source.path, raw);
            trace!("{:?} reference '{}' in {} -> {:?}", kind, raw, source.path.display(), key);
            key
        })
        .collect();
    Ok(keys)
}
