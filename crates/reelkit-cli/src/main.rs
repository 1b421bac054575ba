//! bump-version - Release version synchronizer
//!
//! Bumps the semantic version in `package.json`, mirrors it into the
//! `expo.version` field of `app.json`, and increments the Android
//! `versionCode` when the manifest defines one.

use clap::Parser;
use console::style;
use reelkit_release::{BumpClass, Locator, OsFileSystem};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

/// bump-version - keep package.json and app.json in lockstep
#[derive(Parser)]
#[command(name = "bump-version")]
#[command(version)]
#[command(about = "Bump the app version in package.json and app.json", long_about = None)]
struct Cli {
    /// Bump class (major, minor, patch)
    #[arg(default_value = "patch")]
    bump: String,

    /// Project directory to probe before the default locations
    #[arg(long, env = "REELKIT_PROJECT_ROOT")]
    root: Option<PathBuf>,

    /// Compute and print the new version without writing files
    #[arg(long)]
    dry_run: bool,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();

    let class: BumpClass = match cli.bump.parse() {
        Ok(class) => class,
        Err(_) => {
            eprintln!("{} Invalid bump type: {}", style("❌").red(), cli.bump);
            eprintln!("Valid types: {}", BumpClass::valid_names());
            return ExitCode::FAILURE;
        }
    };

    let locator = Locator::standard(cli.root);

    match commands::bump(&OsFileSystem, &locator, class, cli.dry_run) {
        Ok(report) => {
            println!("{}", output::format_report(&report, output::OutputFormat::from(cli.format.as_str())));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} Error bumping version: {:#}", style("❌").red(), e);
            eprintln!("Stack trace: {:?}", e);
            ExitCode::FAILURE
        }
    }
}
