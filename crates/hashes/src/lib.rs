//! SHA-256 (FIPS 180-4) as a pure, one-shot digest engine.
//!
//! This crate is `no_std` compatible and has zero library dependencies outside
//! the workspace. Dev-only dependencies are used for oracle testing and
//! benchmarking.
//!
//! # Modules
//!
//! - [`crypto`] - The SHA-256 engine: padding, schedule expansion, compression.
//! - [`hex`] - Allocation-free lowercase hex rendering of digests.
//!
//! # Example
//!
//! ```
//! use hashes::{Digest, crypto::Sha256};
//!
//! let out = Sha256::digest(b"abc");
//! assert_eq!(out[..4], [0xba, 0x78, 0x16, 0xbf]);
//! assert_eq!(
//!   Sha256::digest_hex(b"abc").as_str(),
//!   "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! ```
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod crypto;
pub mod hex;

mod util;

pub use traits::{Digest, MessageTooLong};

#[doc(hidden)]
#[cfg(feature = "std")]
pub mod __internal {
  pub mod kernel_test {
    pub use crate::crypto::sha256::kernel_test::{KernelResult, run_all_sha256_kernels, verify_sha256_kernels};
  }
}
