//! CLI application for batch PDF statement scanning.

mod scan;

use std::path::PathBuf;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use stmtscan_core::ScanConfig;

/// Scan a directory of PDF statements and write a sorted CSV summary
#[derive(Parser)]
#[command(name = "stmtscan")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory to scan (non-recursively) for PDF files
    directory: Option<PathBuf>,

    /// Output CSV file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    // CLI arguments override config file values; both fall back to defaults
    let mut config = match cli.config {
        Some(ref path) => ScanConfig::from_file(path)?,
        None => ScanConfig::default(),
    };
    if let Some(directory) = cli.directory {
        config.directory = directory;
    }
    if let Some(output) = cli.output {
        config.output = output;
    }

    scan::run(&config)
}
