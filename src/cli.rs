//! CLI definitions and domain-error mapping. Parsing and presentation
//! only; the pipeline lives in `restore`.

use crate::config::{RestoreConfig, RestoreMode};
use crate::error::ManifestError;
use crate::report::Verbosity;
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

/// Rebuilds a backup's original directory tree from its flattened,
/// content-addressed form.
#[derive(Parser)]
#[command(name = "unback", version)]
#[command(about = "Recovers the original directory tree of a mobile-device backup")]
pub struct Cli {
    /// Folder containing Manifest.mbdb and the flat blob files
    #[arg(short, long)]
    pub input: PathBuf,

    /// Where to copy the reconstructed files to
    #[arg(short, long, required_unless_present = "decode_only")]
    pub output: Option<PathBuf>,

    /// Increase per-record output (repeat for property dumps)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress per-record output
    #[arg(short, long)]
    pub quiet: bool,

    /// Decode the manifest only, don't copy the files
    #[arg(short = 'm', long)]
    pub decode_only: bool,

    /// Emit decoded records as JSON lines instead of text
    #[arg(long)]
    pub json: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}

impl Cli {
    /// Build the immutable run configuration from parsed flags.
    pub fn restore_config(&self) -> anyhow::Result<RestoreConfig> {
        let mode = if self.decode_only {
            RestoreMode::DecodeOnly
        } else {
            let output_root = self
                .output
                .clone()
                .context("--output is required unless --decode-only is set")?;
            RestoreMode::Copy { output_root }
        };
        Ok(RestoreConfig {
            input_root: self.input.clone(),
            mode,
            verbosity: Verbosity::from_flags(self.quiet, self.verbose),
        })
    }
}

/// Map domain errors to a string for CLI output.
pub fn map_error(e: &ManifestError) -> String {
    e.to_string()
}
