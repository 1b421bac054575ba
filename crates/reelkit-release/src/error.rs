//! Error types for the version synchronizer

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for synchronizer operations
pub type Result<T> = std::result::Result<T, ReleaseError>;

/// Synchronizer error types. Every variant aborts the run.
#[derive(Error, Debug)]
pub enum ReleaseError {
    // Resolution errors
    #[error("Could not find {file} (searched: {})", join_paths(.searched))]
    ConfigNotFound {
        file: &'static str,
        searched: Vec<PathBuf>,
    },

    // Input errors
    #[error("Invalid bump type: {0} (valid types: major, minor, patch)")]
    InvalidBumpClass(String),

    #[error("Invalid version format: {0:?} (expected major.minor.patch)")]
    InvalidVersionFormat(String),

    #[error("Cannot apply {class} bump to {version}: component overflows")]
    VersionOverflow { version: String, class: &'static str },

    #[error("{} has no `{field}` field", .file.display())]
    MissingField { file: PathBuf, field: &'static str },

    #[error("Invalid build counter in {}: {value}", .file.display())]
    InvalidBuildCounter { file: PathBuf, value: String },

    // IO errors
    #[error("Failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {} after updating {}", .path.display(), .written.display())]
    PartialWrite {
        path: PathBuf,
        written: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ReleaseError {
    pub(crate) fn read(path: &Path, source: std::io::Error) -> Self {
        ReleaseError::Read {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn write(path: &Path, source: std::io::Error) -> Self {
        ReleaseError::Write {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn json(path: &Path, source: serde_json::Error) -> Self {
        ReleaseError::Json {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Whether both files are still untouched. Only `PartialWrite` leaves
    /// the descriptor updated and the manifest stale.
    pub fn is_pre_write(&self) -> bool {
        !matches!(self, ReleaseError::PartialWrite { .. })
    }
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
