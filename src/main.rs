//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `js_outlinks` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All extraction logic is implemented in the library crate.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use js_outlinks::initialization::init_logger_with;
use js_outlinks::{scan_js_file, LogFormat, LogLevel};

#[derive(Debug, Parser)]
#[command(
    name = "js_outlinks",
    version,
    about = "Extract outlinks from a JavaScript file"
)]
struct Opt {
    /// JavaScript file to scan
    file: PathBuf,

    /// Base URL the file was fetched from; relative links resolve against it
    base_url: String,

    /// Set the logging level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    /// Set the log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    log_format: LogFormat,
}

fn main() -> Result<()> {
    let opt = Opt::parse();

    // Initialize logger based on CLI options
    init_logger_with(opt.log_level.into(), opt.log_format)
        .context("Failed to initialize logger")?;

    // Scan the file using the library
    match scan_js_file(&opt.file, &opt.base_url) {
        Ok(outlinks) => {
            println!("Outlinks extracted: {}", outlinks.len());
            for outlink in &outlinks {
                println!(" - {}", outlink);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("js_outlinks error: {:#}", e);
            process::exit(1);
        }
    }
}
