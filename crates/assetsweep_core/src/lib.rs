//! Core utilities for assetsweep.
//!
//! This crate provides the shared file model for scanning front-end projects:
//! - Collecting source files and image assets from a project tree
//! - Classifying source files (component, markup, stylesheet)
//! - Normalizing asset references and asset paths to root-relative keys
//! - The error taxonomy shared by every stage of a sweep

mod collector;
mod constants;
mod error;
mod paths;
mod types;

// Re-export public API
pub use collector::{Collection, CollectorConfig, collect_files};
pub use constants::{
    ASSET_EXTENSIONS, COMPONENT_EXTENSIONS, EXCLUDED_DIRS, KEEP_BASENAMES, SOURCE_EXTENSIONS,
    STYLESHEET_EXTENSIONS,
};
pub use error::SweepError;
pub use paths::{basename, is_external, resolve_reference, root_key, strip_query_and_fragment};
pub use types::{AssetFile, SourceFile, SourceKind};
