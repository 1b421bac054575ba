//! CLI command implementations

use anyhow::Context;
use reelkit_release::{bump_project, BumpClass, BumpReport, FileSystem, Locator};
use tracing::debug;

/// Bump both version files
pub fn bump(
    fs: &dyn FileSystem,
    locator: &Locator,
    class: BumpClass,
    dry_run: bool,
) -> anyhow::Result<BumpReport> {
    debug!(roots = ?locator.roots(), bump = %class, dry_run, "Bumping version");

    let report = bump_project(fs, locator, class, dry_run)
        .with_context(|| format!("{} bump failed", class))?;

    Ok(report)
}
