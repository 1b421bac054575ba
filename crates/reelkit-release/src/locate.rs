//! Resolution of the package descriptor and application manifest

use crate::fs::FileSystem;
use crate::{ReleaseError, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name of the package descriptor
pub const PACKAGE_FILE: &str = "package.json";

/// File name of the application manifest
pub const MANIFEST_FILE: &str = "app.json";

/// Where the two artifacts were found
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedPaths {
    pub package: PathBuf,
    pub manifest: PathBuf,
}

/// Ordered list of directories probed for each artifact
#[derive(Debug, Clone, Default)]
pub struct Locator {
    roots: Vec<PathBuf>,
}

impl Locator {
    /// Locator with no roots
    pub fn new() -> Self {
        Self::default()
    }

    /// Standard probe order: `explicit_root` (if any), the project directory
    /// above the running executable, the current directory, then `.`.
    pub fn standard(explicit_root: Option<PathBuf>) -> Self {
        let mut locator = Self::new();

        if let Some(root) = explicit_root {
            locator = locator.with_root(root);
        }
        if let Some(dir) = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().and_then(Path::parent).map(Path::to_path_buf))
        {
            locator = locator.with_root(dir);
        }
        if let Ok(cwd) = std::env::current_dir() {
            locator = locator.with_root(cwd);
        }

        locator.with_root(".")
    }

    /// Append a root to probe after the existing ones
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.roots.push(root.into());
        self
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Candidate paths for a file, in probe order
    pub fn candidates(&self, file: &str) -> Vec<PathBuf> {
        self.roots.iter().map(|root| root.join(file)).collect()
    }

    /// First existing candidate for `file`
    pub fn find(&self, fs: &dyn FileSystem, file: &'static str) -> Result<PathBuf> {
        let searched = self.candidates(file);

        match searched.iter().find(|path| fs.exists(path)) {
            Some(path) => {
                debug!(file, path = %path.display(), "Resolved");
                Ok(path.clone())
            }
            None => Err(ReleaseError::ConfigNotFound { file, searched }),
        }
    }

    /// Resolve both artifacts independently
    pub fn resolve(&self, fs: &dyn FileSystem) -> Result<ResolvedPaths> {
        Ok(ResolvedPaths {
            package: self.find(fs, PACKAGE_FILE)?,
            manifest: self.find(fs, MANIFEST_FILE)?,
        })
    }
}
