//! Unback CLI binary.
//!
//! Parses arguments, initializes logging, and runs the restore pipeline.
//! Structural manifest errors exit non-zero; missing blobs and per-record
//! copy failures are reported but leave the exit code clean.

use clap::Parser;
use std::process;
use tracing::{error, info};
use unback::cli::{self, Cli};
use unback::logging::{init_logging, LoggingConfig};
use unback::manifest::Manifest;
use unback::report::Reporter;
use unback::restore::Restorer;

fn main() {
    let cli = Cli::parse();

    let logging_config = build_logging_config(&cli);
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    let config = match cli.restore_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    info!(input = %config.input_root.display(), "unback starting");

    let manifest = match Manifest::open_in(&config.input_root) {
        Ok(manifest) => manifest,
        Err(e) => {
            error!("cannot read manifest: {}", e);
            eprintln!("{}", cli::map_error(&e));
            process::exit(1);
        }
    };

    let mut reporter = Reporter::stdout(config.verbosity, cli.json);
    let restorer = Restorer::new(config);
    match restorer.run(&manifest, &mut reporter) {
        Ok(summary) => {
            info!(
                records = summary.records,
                copied = summary.copied,
                "run complete"
            );
        }
        Err(e) => {
            error!("manifest stream error: {}", e);
            eprintln!("{}", cli::map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from CLI flags; `UNBACK_LOG` still wins
/// inside the filter itself.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    let mut config = LoggingConfig::default();
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    config
}
