//! Reelkit Release - keeps `package.json` and `app.json` on the same version
//!
//! The work is split into a pure part and a thin I/O shell:
//! - [`Version::bump`] and [`plan_bump`] compute the new version and render
//!   both documents without touching disk
//! - [`Locator`] finds the two files by probing candidate directories
//! - [`sync_versions`] reads, plans and writes through a [`FileSystem`]
//!
//! # Example
//!
//! ```rust
//! use reelkit_release::{bump_project, BumpClass, Locator, MemoryFileSystem};
//!
//! let fs = MemoryFileSystem::new();
//! fs.insert("/app/package.json", r#"{"version":"1.2.3"}"#)
//!     .insert("/app/app.json", r#"{"expo":{"version":"1.2.3","android":{"versionCode":7}}}"#);
//!
//! let report = bump_project(&fs, &Locator::new().with_root("/app"), BumpClass::Minor, false).unwrap();
//! assert_eq!(report.next.to_string(), "1.3.0");
//! assert_eq!(report.build_counter, Some(8));
//! ```

pub mod error;
pub mod fs;
pub mod locate;
pub mod sync;
pub mod version;

pub use error::{ReleaseError, Result};
pub use fs::{FileSystem, MemoryFileSystem, OsFileSystem};
pub use locate::{Locator, ResolvedPaths, MANIFEST_FILE, PACKAGE_FILE};
pub use sync::{plan_bump, sync_versions, BumpPlan, BumpReport};
pub use version::{BumpClass, Version};

/// Resolve both files and bump them
pub fn bump_project(
    fs: &dyn FileSystem,
    locator: &Locator,
    class: BumpClass,
    dry_run: bool,
) -> Result<BumpReport> {
    let paths = locator.resolve(fs)?;
    sync_versions(fs, &paths, class, dry_run)
}
