use log::trace;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    constants::{COMPONENT_EXTENSIONS, STYLESHEET_EXTENSIONS},
    error::SweepError,
    paths::basename,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Markup, logic and style under separate top-level tags
    Component,
    Markup,
    Stylesheet,
}

impl SourceKind {
    pub fn from_extension(ext: &str) -> Self {
        if COMPONENT_EXTENSIONS.contains(&ext) {
            SourceKind::Component
        } else if STYLESHEET_EXTENSIONS.contains(&ext) {
            SourceKind::Stylesheet
        } else {
            SourceKind::Markup
        }
    }

    pub fn for_path(path: &Path) -> Self {
        path.extension().and_then(|e| e.to_str()).map(Self::from_extension).unwrap_or(Self::Markup)
    }
}

#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub content: String,
    pub kind: SourceKind,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        let path = path.into();
        let kind = SourceKind::for_path(&path);
        Self { path, content: content.into(), kind }
    }

    /// Read a source file from disk, classifying it by extension
    pub fn read(path: &Path) -> Result<Self, SweepError> {
        trace!("Reading source file: {}", path.display());
        let content = fs::read_to_string(path)
            .map_err(|source| SweepError::Read { path: path.to_path_buf(), source })?;
        Ok(Self::new(path, content))
    }
}

/// An image file found on disk.
///
/// `key` is the path relative to the scan root with `/` separators, the same
/// shape references are normalized to, so the two compare by string equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetFile {
    pub path: PathBuf,
    pub key: String,
}

impl AssetFile {
    pub fn basename(&self) -> &str {
        basename(&self.key)
    }
}
