//! Output formatting for CLI

use console::style;
use reelkit_release::{BumpReport, MANIFEST_FILE, PACKAGE_FILE};
use serde::Serialize;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl From<&str> for OutputFormat {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Text,
        }
    }
}

/// Pretty JSON for any serializable value
pub fn to_json<T: Serialize>(data: &T) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string())
}

/// Render a run summary
pub fn format_report(report: &BumpReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => to_json(report),
        OutputFormat::Text => {
            let mut lines = vec![
                format!("Using {}: {}", PACKAGE_FILE, report.package_path.display()),
                format!("Using {}: {}", MANIFEST_FILE, report.manifest_path.display()),
                format!("Current version: {}", report.previous),
                format!("New version: {}", report.next),
            ];

            if let Some(code) = report.build_counter {
                lines.push(format!("{} Android versionCode bumped to {}", style("✅").green(), code));
            }

            if report.dry_run {
                lines.push(format!("{} Dry run, no files written", style("ℹ").cyan()));
            } else {
                lines.push(format!(
                    "{} Version bumped to {} in both {} and {}",
                    style("✅").green(),
                    report.next,
                    PACKAGE_FILE,
                    MANIFEST_FILE
                ));
            }

            lines.join("\n")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelkit_release::Version;
    use std::path::PathBuf;

    fn report(build_counter: Option<u64>, dry_run: bool) -> BumpReport {
        BumpReport {
            package_path: PathBuf::from("/app/package.json"),
            manifest_path: PathBuf::from("/app/app.json"),
            bump: "minor",
            previous: Version::new(1, 2, 3),
            next: Version::new(1, 3, 0),
            build_counter,
            dry_run,
        }
    }

    #[test]
    fn test_text_report() {
        let text = format_report(&report(Some(12), false), OutputFormat::Text);
        assert!(text.contains("Using package.json: /app/package.json"));
        assert!(text.contains("Using app.json: /app/app.json"));
        assert!(text.contains("Current version: 1.2.3"));
        assert!(text.contains("New version: 1.3.0"));
        assert!(text.contains("versionCode bumped to 12"));
    }

    #[test]
    fn test_text_report_without_counter() {
        let text = format_report(&report(None, true), OutputFormat::Text);
        assert!(!text.contains("versionCode"));
        assert!(text.contains("Dry run"));
    }

    #[test]
    fn test_json_report() {
        let json: serde_json::Value =
            serde_json::from_str(&format_report(&report(Some(12), false), OutputFormat::Json)).unwrap();
        assert_eq!(json["previous"], "1.2.3");
        assert_eq!(json["next"], "1.3.0");
        assert_eq!(json["build_counter"], 12);
        assert_eq!(json["bump"], "minor");
    }

    #[test]
    fn test_format_parse() {
        assert_eq!(OutputFormat::from("JSON"), OutputFormat::Json);
        assert_eq!(OutputFormat::from("table"), OutputFormat::Text);
    }
}
