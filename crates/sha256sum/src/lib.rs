//! File digest collaborator for the SHA-256 engine.
//!
//! Reads one file fully into memory, hands the bytes to
//! [`hashes::crypto::Sha256`], and returns the lowercase hex digest. The engine
//! performs no I/O of its own.

use std::{fs, path::PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use hashes::{
  crypto::{Sha256, Sha256KernelId, sha256},
  hex::{self, HexDigest},
};

/// Compute the SHA-256 digest of a file.
#[derive(Parser, Debug)]
#[command(name = "sha256sum", version, about)]
pub struct Cli {
  /// File to hash.
  pub path: PathBuf,

  /// Block compression kernel.
  #[arg(long, value_enum, default_value_t = Kernel::Portable)]
  pub kernel: Kernel,
}

/// Command-line name for a [`Sha256KernelId`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Kernel {
  /// Full 64-word schedule, explicit variable shifts.
  Reference,
  /// 16-word ring schedule, rotating register names.
  Portable,
}

impl From<Kernel> for Sha256KernelId {
  fn from(kernel: Kernel) -> Self {
    match kernel {
      Kernel::Reference => Sha256KernelId::Reference,
      Kernel::Portable => Sha256KernelId::Portable,
    }
  }
}

/// Hash the file named on the command line.
///
/// # Errors
///
/// Fails when the file cannot be opened or read, or when its length cannot be
/// encoded in the SHA-256 length field.
pub fn run(cli: &Cli) -> anyhow::Result<HexDigest> {
  let data = fs::read(&cli.path).with_context(|| format!("failed to open file: {}", cli.path.display()))?;

  let kernel = Sha256KernelId::from(cli.kernel);
  tracing::debug!(
    path = %cli.path.display(),
    bytes = data.len(),
    blocks = sha256::block_count(data.len()),
    %kernel,
    "hashing file"
  );

  let digest = Sha256::with_kernel(kernel).hash_checked(&data)?;
  let hex = hex::encode(&digest);
  tracing::info!(path = %cli.path.display(), digest = %hex, "digest computed");
  Ok(hex)
}
