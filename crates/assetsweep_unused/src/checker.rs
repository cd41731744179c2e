use anyhow::{Context, Result};
use assetsweep_core::{SourceFile, SweepError, collect_files};
use log::{debug, info};
use rayon::prelude::*;

use crate::{
    config::Config,
    events::{ScanEvent, ScanEventSink},
    extractor::extract_references,
    patterns::ReferencePatterns,
    remover::remove_assets,
    resolver::find_unused,
    types::{ExclusionList, ReferenceSet, SweepResult},
};

/// Run the whole sweep: collect, extract, diff, and remove if asked.
///
/// Only setup problems (missing root, unusable extension list) return `Err`.
/// Unreadable or unparsable sources and failed deletions are recorded in the
/// result and reported through `sink`.
pub fn run_unused_assets_check(cfg: &Config, sink: &dyn ScanEventSink) -> Result<SweepResult> {
    info!("Starting unused asset sweep");

    let root = cfg.resolve_root()?;
    let patterns = ReferencePatterns::new(&cfg.asset_extensions)
        .with_context(|| format!("Invalid asset extensions: {:?}", cfg.asset_extensions))?;
    sink.on_event(ScanEvent::Started { root: &root });

    let collection = collect_files(&cfg.collector_config(root.clone()))?;
    for reason in &collection.skipped {
        sink.on_event(ScanEvent::PathSkipped { reason });
    }
    sink.on_event(ScanEvent::Collected {
        sources: collection.sources.len(),
        assets: collection.assets.len(),
    });

    // Extraction runs on the rayon pool; collect() keeps the walk order
    info!("Extracting references from {} source files", collection.sources.len());
    let extracted: Vec<Result<Vec<String>, SweepError>> = collection
        .sources
        .par_iter()
        .map(|path| {
            let source = SourceFile::read(path)?;
            extract_references(&root, &source, &patterns)
        })
        .collect();

    let mut references = ReferenceSet::default();
    let mut skipped_sources = Vec::new();
    for (path, outcome) in collection.sources.iter().zip(extracted) {
        match outcome {
            Ok(keys) => {
                if sink.wants_detailed_events() {
                    sink.on_event(ScanEvent::SourceScanned { path, references: keys.len() });
                }
                references.extend(keys);
            }
            Err(error) => {
                sink.on_event(ScanEvent::SourceSkipped { error: &error });
                skipped_sources.push(error);
            }
        }
    }
    debug!("Collected {} unique references", references.len());

    let exclusions = ExclusionList::new(&cfg.keep);
    let unused = find_unused(&collection.assets, &references, &exclusions);
    sink.on_event(ScanEvent::UnusedFound { count: unused.len() });

    let removal = cfg.remove_assets.then(|| remove_assets(&unused, &exclusions, sink));

    let (removed, failed) = removal
        .as_ref()
        .map(|r| (r.removed().count(), r.failed().count()))
        .unwrap_or_default();
    sink.on_event(ScanEvent::Completed { unused: unused.len(), removed, failed });

    Ok(SweepResult {
        root,
        unused,
        removal,
        skipped_sources,
        skipped_paths: collection.skipped,
        sources_scanned: collection.sources.len(),
        assets_scanned: collection.assets.len(),
        references_found: references.len(),
    })
}
