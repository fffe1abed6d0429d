//! `sha256sum` entry point.
//!
//! Usage: `sha256sum [--kernel reference|portable] <FILE>`
//!
//! Prints the digest on stdout. Logs go to stderr and are filtered by
//! `RUST_LOG` (default `warn`).

use std::process::ExitCode;

use clap::{Parser, error::ErrorKind};
use sha256sum::{Cli, run};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
    .with_writer(std::io::stderr)
    .init();

  let cli = match Cli::try_parse() {
    Ok(cli) => cli,
    Err(err) => {
      if let Err(io) = err.print() {
        tracing::debug!(error = %io, "failed to write usage message");
      }
      return if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        ExitCode::SUCCESS
      } else {
        ExitCode::FAILURE
      };
    }
  };

  match run(&cli) {
    Ok(hex) => {
      println!("{hex}");
      ExitCode::SUCCESS
    }
    Err(err) => {
      tracing::debug!(error = ?err, "hashing failed");
      eprintln!("Error: {err:#}");
      ExitCode::FAILURE
    }
  }
}
