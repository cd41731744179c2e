use std::{
    io,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Everything that can go wrong during a sweep.
///
/// Only `Setup` aborts a run; it is returned as an error rather than recorded. The other variants are scoped to one file: the
/// pipeline records them, logs them, and moves on to the next file.
#[derive(Debug, Error)]
pub enum SweepError {
    #[error("cannot read root directory {}: {source}", .path.display())]
    Setup {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse component {}: {reason}", .path.display())]
    Parse { path: PathBuf, reason: String },

    #[error("failed to remove {}: {source}", .path.display())]
    Deletion {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SweepError {
    /// The file or directory the error is about
    pub fn path(&self) -> &Path {
        match self {
            SweepError::Setup { path, .. }
            | SweepError::Read { path, .. }
            | SweepError::Parse { path, .. }
            | SweepError::Deletion { path, .. } => path,
        }
    }
}
