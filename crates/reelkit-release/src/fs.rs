//! File system seam used by the synchronizer

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

/// The three file operations the synchronizer needs
pub trait FileSystem {
    fn exists(&self, path: &Path) -> bool;
    fn read_text(&self, path: &Path) -> io::Result<String>;
    fn write_text(&self, path: &Path, contents: &str) -> io::Result<()>;
}

/// Real disk access
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_text(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write_text(&self, path: &Path, contents: &str) -> io::Result<()> {
        std::fs::write(path, contents)
    }
}

#[derive(Debug, Default)]
struct MemoryInner {
    files: BTreeMap<PathBuf, String>,
    read_only: Vec<PathBuf>,
    writes: usize,
}

/// In-memory file system; clones share the same files
#[derive(Debug, Default, Clone)]
pub struct MemoryFileSystem {
    inner: Arc<Mutex<MemoryInner>>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a file
    pub fn insert(&self, path: impl Into<PathBuf>, contents: impl Into<String>) -> &Self {
        self.lock().files.insert(path.into(), contents.into());
        self
    }

    /// Make writes to `path` fail with `PermissionDenied`
    pub fn deny_writes(&self, path: impl Into<PathBuf>) -> &Self {
        self.lock().read_only.push(path.into());
        self
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<String> {
        self.lock().files.get(path.as_ref()).cloned()
    }

    /// Number of successful writes so far
    pub fn write_count(&self) -> usize {
        self.lock().writes
    }

    fn lock(&self) -> MutexGuard<'_, MemoryInner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl FileSystem for MemoryFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.lock().files.contains_key(path)
    }

    fn read_text(&self, path: &Path) -> io::Result<String> {
        self.lock()
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("{} not found", path.display())))
    }

    fn write_text(&self, path: &Path, contents: &str) -> io::Result<()> {
        let mut inner = self.lock();
        if inner.read_only.iter().any(|p| p == path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("{} is read-only", path.display()),
            ));
        }
        inner.files.insert(path.to_path_buf(), contents.to_string());
        inner.writes += 1;
        Ok(())
    }
}
