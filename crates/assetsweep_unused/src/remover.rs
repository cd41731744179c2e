use assetsweep_core::{AssetFile, SweepError};
use log::debug;
use std::fs;

use crate::{
    events::{ScanEvent, ScanEventSink},
    types::{ExclusionList, RemovalOutcome, RemovalReport},
};

/// Delete each asset in `unused`, one at a time.
///
/// Exclusion-listed assets are left on disk. A failed deletion is recorded and
/// the pass moves on to the next asset.
pub fn remove_assets(
    unused: &[AssetFile],
    exclusions: &ExclusionList,
    sink: &dyn ScanEventSink,
) -> RemovalReport {
    debug!("Removing {} unused assets", unused.len());
    let mut report = RemovalReport::default();

    for asset in unused {
        if exclusions.excludes(asset) {
            sink.on_event(ScanEvent::RemovalSkipped { asset });
            report.outcomes.push(RemovalOutcome::Kept(asset.clone()));
            continue;
        }

        match fs::remove_file(&asset.path) {
            Ok(()) => {
                sink.on_event(ScanEvent::AssetRemoved { asset });
                report.outcomes.push(RemovalOutcome::Removed(asset.clone()));
            }
            Err(source) => {
                let error = SweepError::Deletion { path: asset.path.clone(), source };
                sink.on_event(ScanEvent::RemovalFailed { error: &error });
                report.outcomes.push(RemovalOutcome::Failed(error));
            }
        }
    }

    report
}
