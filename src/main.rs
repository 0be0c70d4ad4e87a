//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `contact_handles` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Reading the input document from a file or stdin
//! - Printing the result as JSON
//!
//! All extraction is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use std::process;

use contact_handles::config::Opt;
use contact_handles::initialization::init_logger_with;
use contact_handles::{extract_from_input, ExtractConfig};

fn main() -> Result<()> {
    let opt = Opt::parse();

    init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    if let Err(e) = run(&opt) {
        eprintln!("contact_handles error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}

fn run(opt: &Opt) -> Result<()> {
    let config = ExtractConfig::from(opt);
    config.validate().context("Invalid options")?;

    let input = read_input(opt)?;
    log::debug!("Read {} bytes of {:?} input", input.len(), opt.input);

    let handles = extract_from_input(&input, opt.input, &config)
        .context("Failed to extract handles")?;

    let json = if opt.pretty {
        serde_json::to_string_pretty(&handles)
    } else {
        serde_json::to_string(&handles)
    }
    .context("Failed to serialize handles")?;
    println!("{json}");
    Ok(())
}

/// Reads the input document. Bytes that are not UTF-8 (legacy encoded pages)
/// are replaced with U+FFFD instead of failing the run.
fn read_input(opt: &Opt) -> Result<String> {
    let bytes = match opt.file.as_deref() {
        Some(path) if path.as_os_str() != "-" => std::fs::read(path)
            .with_context(|| format!("Failed to read input file {}", path.display()))?,
        _ => {
            let mut bytes = Vec::new();
            std::io::stdin()
                .read_to_end(&mut bytes)
                .context("Failed to read input from stdin")?;
            bytes
        }
    };
    match String::from_utf8(bytes) {
        Ok(input) => Ok(input),
        Err(e) => {
            log::warn!("Input is not valid UTF-8; replacing invalid bytes");
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}
