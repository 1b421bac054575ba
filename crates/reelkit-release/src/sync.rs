//! Bump planning and the two-file write

use crate::fs::FileSystem;
use crate::locate::ResolvedPaths;
use crate::{BumpClass, ReleaseError, Result, Version};
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Manifest key holding the app configuration
pub const APP_CONFIG_KEY: &str = "expo";

/// Rendered contents of both files after a bump, not yet written
#[derive(Debug, Clone, PartialEq)]
pub struct BumpPlan {
    pub previous: Version,
    pub next: Version,
    /// Android `versionCode` after the bump, if the manifest defines one
    pub build_counter: Option<u64>,
    pub package_json: String,
    pub manifest_json: String,
}

/// Summary of a synchronizer run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BumpReport {
    pub package_path: PathBuf,
    pub manifest_path: PathBuf,
    pub bump: &'static str,
    pub previous: Version,
    pub next: Version,
    pub build_counter: Option<u64>,
    pub dry_run: bool,
}

/// Compute the new contents of both documents without touching disk
pub fn plan_bump(
    paths: &ResolvedPaths,
    package_text: &str,
    manifest_text: &str,
    class: BumpClass,
) -> Result<BumpPlan> {
    let mut package: Value =
        serde_json::from_str(package_text).map_err(|e| ReleaseError::json(&paths.package, e))?;
    let mut manifest: Value =
        serde_json::from_str(manifest_text).map_err(|e| ReleaseError::json(&paths.manifest, e))?;

    let current = package
        .get("version")
        .ok_or_else(|| missing(&paths.package, "version"))?;
    let previous: Version = match current.as_str() {
        Some(s) => s.parse()?,
        None => return Err(ReleaseError::InvalidVersionFormat(current.to_string())),
    };
    let next = previous.bump(class)?;
    let next_str = next.to_string();

    let package_obj = package
        .as_object_mut()
        .ok_or_else(|| missing(&paths.package, "version"))?;
    package_obj.insert("version".to_string(), Value::String(next_str.clone()));

    let app_config = manifest
        .get_mut(APP_CONFIG_KEY)
        .and_then(Value::as_object_mut)
        .ok_or_else(|| missing(&paths.manifest, APP_CONFIG_KEY))?;
    app_config.insert("version".to_string(), Value::String(next_str));

    let build_counter = match app_config
        .get_mut("android")
        .and_then(Value::as_object_mut)
        .and_then(|android| android.get_mut("versionCode"))
    {
        Some(code) => Some(increment_counter(&paths.manifest, code)?),
        None => None,
    };

    Ok(BumpPlan {
        previous,
        next,
        build_counter,
        package_json: render(&paths.package, &package)?,
        manifest_json: render(&paths.manifest, &manifest)?,
    })
}

/// Read both files, bump, and write them back (descriptor first).
///
/// Both documents are rendered before the first write. There is no
/// rollback if the manifest write fails after the descriptor write.
#[instrument(skip(fs, paths), fields(package = %paths.package.display(), manifest = %paths.manifest.display()))]
pub fn sync_versions(
    fs: &dyn FileSystem,
    paths: &ResolvedPaths,
    class: BumpClass,
    dry_run: bool,
) -> Result<BumpReport> {
    let package_text = fs
        .read_text(&paths.package)
        .map_err(|e| ReleaseError::read(&paths.package, e))?;
    let manifest_text = fs
        .read_text(&paths.manifest)
        .map_err(|e| ReleaseError::read(&paths.manifest, e))?;

    let plan = plan_bump(paths, &package_text, &manifest_text, class)?;
    debug!(previous = %plan.previous, next = %plan.next, "Planned bump");

    if dry_run {
        info!("Dry run, nothing written");
    } else {
        fs.write_text(&paths.package, &plan.package_json)
            .map_err(|e| ReleaseError::write(&paths.package, e))?;
        fs.write_text(&paths.manifest, &plan.manifest_json)
            .map_err(|source| ReleaseError::PartialWrite {
                path: paths.manifest.clone(),
                written: paths.package.clone(),
                source,
            })?;
        info!(version = %plan.next, build_counter = ?plan.build_counter, "Version files updated");
    }

    Ok(BumpReport {
        package_path: paths.package.clone(),
        manifest_path: paths.manifest.clone(),
        bump: class.as_str(),
        previous: plan.previous,
        next: plan.next,
        build_counter: plan.build_counter,
        dry_run,
    })
}

/// Integral floats such as `12.0` count as integers and are written back
/// without the fraction.
fn increment_counter(file: &Path, code: &mut Value) -> Result<u64> {
    let next = code
        .as_u64()
        .or_else(|| integral_float(code))
        .and_then(|n| n.checked_add(1))
        .ok_or_else(|| ReleaseError::InvalidBuildCounter {
            file: file.to_path_buf(),
            value: code.to_string(),
        })?;
    *code = Value::from(next);
    Ok(next)
}

fn integral_float(code: &Value) -> Option<u64> {
    // 2^53: above this an f64 no longer holds every integer
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
    code.as_f64()
        .filter(|f| f.fract() == 0.0 && (0.0..=MAX_EXACT).contains(f))
        .map(|f| f as u64)
}

/// Two-space pretty JSON with a trailing newline
fn render(path: &Path, value: &Value) -> Result<String> {
    let mut out = serde_json::to_string_pretty(value).map_err(|e| ReleaseError::json(path, e))?;
    out.push('\n');
    Ok(out)
}

fn missing(file: &Path, field: &'static str) -> ReleaseError {
    ReleaseError::MissingField {
        file: file.to_path_buf(),
        field,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths() -> ResolvedPaths {
        ResolvedPaths {
            package: PathBuf::from("/app/package.json"),
            manifest: PathBuf::from("/app/app.json"),
        }
    }

    const PACKAGE: &str = r#"{"name":"field-guide","version":"1.2.3","private":true}"#;
    const MANIFEST: &str = r#"{"expo":{"name":"Field Guide","version":"1.2.3","android":{"package":"org.example.guide","versionCode":41}}}"#;

    #[test]
    fn test_plan_updates_both_versions_and_counter() {
        let plan = plan_bump(&paths(), PACKAGE, MANIFEST, BumpClass::Minor).unwrap();

        assert_eq!(plan.previous, Version::new(1, 2, 3));
        assert_eq!(plan.next, Version::new(1, 3, 0));
        assert_eq!(plan.build_counter, Some(42));

        let package: Value = serde_json::from_str(&plan.package_json).unwrap();
        let manifest: Value = serde_json::from_str(&plan.manifest_json).unwrap();
        assert_eq!(package["version"], "1.3.0");
        assert_eq!(manifest["expo"]["version"], "1.3.0");
        assert_eq!(manifest["expo"]["android"]["versionCode"], 42);
    }

    #[test]
    fn test_plan_renders_pretty_with_trailing_newline_and_order() {
        let plan = plan_bump(&paths(), PACKAGE, MANIFEST, BumpClass::Patch).unwrap();

        assert_eq!(
            plan.package_json,
            "{\n  \"name\": \"field-guide\",\n  \"version\": \"1.2.4\",\n  \"private\": true\n}\n"
        );
    }

    #[test]
    fn test_missing_counter_is_left_unset() {
        let manifest = r#"{"expo":{"version":"1.2.3","ios":{"buildNumber":"7"}}}"#;
        let plan = plan_bump(&paths(), PACKAGE, manifest, BumpClass::Patch).unwrap();

        assert_eq!(plan.build_counter, None);
        let manifest: Value = serde_json::from_str(&plan.manifest_json).unwrap();
        assert!(manifest["expo"].get("android").is_none());
        assert_eq!(manifest["expo"]["ios"]["buildNumber"], "7");
    }

    #[test]
    fn test_zero_counter_is_bumped() {
        let manifest = r#"{"expo":{"version":"1.2.3","android":{"versionCode":0}}}"#;
        let plan = plan_bump(&paths(), PACKAGE, manifest, BumpClass::Patch).unwrap();
        assert_eq!(plan.build_counter, Some(1));
    }

    #[test]
    fn test_non_integer_counter_rejected() {
        for code in [r#""12""#, "12.5", "-3", "null"] {
            let manifest = format!(r#"{{"expo":{{"version":"1.2.3","android":{{"versionCode":{}}}}}}}"#, code);
            let err = plan_bump(&paths(), PACKAGE, &manifest, BumpClass::Patch).unwrap_err();
            assert!(matches!(err, ReleaseError::InvalidBuildCounter { .. }), "accepted {}", code);
        }
    }

    #[test]
    fn test_integral_float_counter_is_bumped() {
        let manifest = r#"{"expo":{"version":"1.2.3","android":{"versionCode":12.0}}}"#;
        let plan = plan_bump(&paths(), PACKAGE, manifest, BumpClass::Patch).unwrap();

        assert_eq!(plan.build_counter, Some(13));
        assert!(plan.manifest_json.contains("\"versionCode\": 13\n"));
    }

    #[test]
    fn test_overflowing_version_rejected() {
        let package = r#"{"version":"1.2.18446744073709551615"}"#;
        let err = plan_bump(&paths(), package, MANIFEST, BumpClass::Patch).unwrap_err();
        assert!(matches!(err, ReleaseError::VersionOverflow { .. }));
    }

    #[test]
    fn test_manifest_without_app_config_rejected() {
        let err = plan_bump(&paths(), PACKAGE, r#"{"name":"x"}"#, BumpClass::Patch).unwrap_err();
        assert!(matches!(err, ReleaseError::MissingField { field: "expo", .. }));
    }

    #[test]
    fn test_non_string_version_rejected() {
        let err = plan_bump(&paths(), r#"{"version":1}"#, MANIFEST, BumpClass::Patch).unwrap_err();
        assert!(matches!(err, ReleaseError::InvalidVersionFormat(_)));
    }

    #[test]
    fn test_invalid_json_names_the_file() {
        let err = plan_bump(&paths(), PACKAGE, "{ not json", BumpClass::Patch).unwrap_err();
        match err {
            ReleaseError::Json { path, .. } => assert_eq!(path, PathBuf::from("/app/app.json")),
            other => panic!("expected Json error, got {:?}", other),
        }
    }
}
