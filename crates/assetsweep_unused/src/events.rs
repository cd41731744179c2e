//! Progress events emitted while a sweep runs.
//!
//! The pipeline never prints. It reports what it is doing to a
//! [`ScanEventSink`]; the binary forwards events to the `log` facade, tests
//! record them, library users can silence them.

use assetsweep_core::{AssetFile, SweepError};
use log::{debug, info, trace, warn};
use std::path::Path;

#[derive(Debug, Clone, Copy)]
pub enum ScanEvent<'a> {
    Started { root: &'a Path },

    /// The walk hit an unreadable sub-path and moved on
    PathSkipped { reason: &'a str },

    Collected { sources: usize, assets: usize },

    /// Per-file; only sent to sinks that want detailed events
    SourceScanned { path: &'a Path, references: usize },

    /// A source file could not be read or parsed and contributed nothing
    SourceSkipped { error: &'a SweepError },

    UnusedFound { count: usize },

    AssetRemoved { asset: &'a AssetFile },

    /// An exclusion-listed asset was left on disk
    RemovalSkipped { asset: &'a AssetFile },

    RemovalFailed { error: &'a SweepError },

    Completed { unused: usize, removed: usize, failed: usize },
}

impl ScanEvent<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            ScanEvent::Started { .. } => "started",
            ScanEvent::PathSkipped { .. } => "path_skipped",
            ScanEvent::Collected { .. } => "collected",
            ScanEvent::SourceScanned { .. } => "source_scanned",
            ScanEvent::SourceSkipped { .. } => "source_skipped",
            ScanEvent::UnusedFound { .. } => "unused_found",
            ScanEvent::AssetRemoved { .. } => "asset_removed",
            ScanEvent::RemovalSkipped { .. } => "removal_skipped",
            ScanEvent::RemovalFailed { .. } => "removal_failed",
            ScanEvent::Completed { .. } => "completed",
        }
    }
}

pub trait ScanEventSink: Send + Sync {
    fn on_event(&self, event: ScanEvent<'_>);

    /// Whether per-file events should be sent at all
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// Forwards events to the `log` facade
pub struct LogEventSink;

impl ScanEventSink for LogEventSink {
    fn on_event(&self, event: ScanEvent<'_>) {
        trace!("event: {}", event.name());
        match event {
            ScanEvent::Started { root } => info!("Scanning {}", root.display()),
            ScanEvent::PathSkipped { reason } => warn!("Skipped unreadable path: {}", reason),
            ScanEvent::Collected { sources, assets } => {
                info!("Found {} source files and {} assets", sources, assets)
            }
            ScanEvent::SourceScanned { path, references } => {
                trace!("Found {} references in {}", references, path.display())
            }
            ScanEvent::SourceSkipped { error } => warn!("Skipping source file: {}", error),
            ScanEvent::UnusedFound { count } => info!("Found {} unused assets", count),
            ScanEvent::AssetRemoved { asset } => debug!("Removed {}", asset.key),
            ScanEvent::RemovalSkipped { asset } => {
                debug!("Keeping exclusion-listed asset {}", asset.key)
            }
            ScanEvent::RemovalFailed { error } => warn!("{}", error),
            ScanEvent::Completed { unused, removed, failed } => {
                info!("Sweep complete: {} unused, {} removed, {} failed", unused, removed, failed)
            }
        }
    }
}

/// Drops every event
pub struct NoopEventSink;

impl ScanEventSink for NoopEventSink {
    fn on_event(&self, _event: ScanEvent<'_>) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
