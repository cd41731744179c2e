//! Unused image asset detection for front-end projects.
//!
//! This crate scans markup, stylesheets and single-file component templates
//! for references to image files, and reports the images nothing references.
//! It can also delete them.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```no_run
//! use assetsweep_unused::{Config, LogEventSink, run_unused_assets_check};
//! use std::io::{BufWriter, Write};
//!
//! # fn main() -> anyhow::Result<()> {
//! let cfg = Config {
//!     root: std::path::PathBuf::from("/path/to/project"),
//!     ..Config::default()
//! };
//!
//! let result = run_unused_assets_check(&cfg, &LogEventSink)?;
//!
//! // Use buffered output for better performance
//! let mut stdout = BufWriter::new(std::io::stdout());
//! assetsweep_unused::print_unused_report(&mut stdout, &result)?;
//! stdout.flush()?;
//! # Ok(())
//! # }
//! ```

mod checker;
mod config;
mod events;
mod extractor;
mod patterns;
mod remover;
mod reporter;
mod resolver;
mod template;
mod types;

// Re-export public API
pub use checker::run_unused_assets_check;
pub use config::Config;
pub use events::{LogEventSink, NoopEventSink, ScanEvent, ScanEventSink};
pub use extractor::extract_references;
pub use patterns::{PatternKind, ReferencePatterns};
pub use remover::remove_assets;
pub use reporter::{print_json_report, print_no_unused_message, print_unused_report};
pub use resolver::find_unused;
pub use template::{ComponentTemplate, TemplateError, TemplateExtractor, WholeFile, extractor_for};
pub use types::{ExclusionList, ReferenceSet, RemovalOutcome, RemovalReport, SweepResult};
