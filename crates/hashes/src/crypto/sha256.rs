//! SHA-256 (FIPS 180-4).
//!
//! The engine runs a fixed pipeline per call:
//!
//! 1. load the initial state [`H0`],
//! 2. pad the message and split it into 64-byte blocks,
//! 3. for each block in order, expand the 64-word schedule and run the 64
//!    compression rounds, replacing the state,
//! 4. serialize the state big-endian.
//!
//! Blocks must be processed sequentially because the state threads through
//! them. Each call owns its state, schedule, and working variables, so
//! independent calls can run on separate threads without synchronization.
//!
//! # Example
//!
//! ```
//! use hashes::{Digest, crypto::Sha256};
//!
//! let hex = Sha256::digest_hex(b"");
//! assert_eq!(hex, "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855");
//! assert_eq!(Sha256::digest(b"").len(), 32);
//! ```

mod compress;
mod constants;
mod kernels;
mod padding;
mod portable;
mod schedule;

pub use compress::compress;
pub use constants::{BLOCK_LEN, H0, K, LENGTH_FIELD_LEN, OUTPUT_LEN};
pub use kernels::{ALL as ALL_KERNELS, Sha256KernelId, id_from_name as kernel_from_name};
#[cfg(feature = "alloc")]
pub use padding::pad;
pub use padding::{Block, PaddedBlocks, bit_length, block_count, padded_len, segment};
pub use schedule::{SCHEDULE_LEN, expand};
use traits::{Digest, MessageTooLong};

use self::kernels::{CompressBlockFn, compress_block_fn};
use crate::{
  hex::{self, HexDigest},
  util::store_be_words,
};

/// SHA-256 engine bound to one compression kernel.
///
/// The value itself is stateless configuration: all working state lives on
/// the stack of each call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Sha256 {
  kernel: Sha256KernelId,
}

impl Sha256 {
  /// An engine using `kernel` for block compression.
  #[inline]
  #[must_use]
  pub const fn with_kernel(kernel: Sha256KernelId) -> Self {
    Self { kernel }
  }

  /// The compression kernel in use.
  #[inline]
  #[must_use]
  pub const fn kernel(&self) -> Sha256KernelId {
    self.kernel
  }

  /// Hash `data` with this engine's kernel.
  ///
  /// The length field holds the bit length modulo `2^64`; see
  /// [`Sha256::hash_checked`] for a variant that rejects such messages.
  #[must_use]
  pub fn hash(&self, data: &[u8]) -> [u8; OUTPUT_LEN] {
    let bit_len = padding::wrapping_bit_length(data.len());
    run(compress_block_fn(self.kernel), PaddedBlocks::new(data, bit_len))
  }

  /// Hash `data`, refusing messages of `2^61` bytes or more.
  ///
  /// # Errors
  ///
  /// Returns [`MessageTooLong`] when the bit length does not fit in 64 bits.
  pub fn hash_checked(&self, data: &[u8]) -> Result<[u8; OUTPUT_LEN], MessageTooLong> {
    let bit_len = bit_length(data.len())?;
    Ok(run(compress_block_fn(self.kernel), PaddedBlocks::new(data, bit_len)))
  }

  /// Compute the digest of `data` with an explicit kernel.
  #[inline]
  #[must_use]
  pub fn digest_with(kernel: Sha256KernelId, data: &[u8]) -> [u8; OUTPUT_LEN] {
    Self::with_kernel(kernel).hash(data)
  }

  /// Compute the digest of `data` as 64 lowercase hex characters.
  #[inline]
  #[must_use]
  pub fn digest_hex(data: &[u8]) -> HexDigest {
    hex::encode(&<Self as Digest>::digest(data))
  }

  /// The padded block sequence the engine compresses for `data`.
  #[inline]
  #[must_use]
  pub fn blocks(data: &[u8]) -> PaddedBlocks<'_> {
    PaddedBlocks::new(data, padding::wrapping_bit_length(data.len()))
  }
}

impl Digest for Sha256 {
  const OUTPUT_SIZE: usize = OUTPUT_LEN;
  const BLOCK_SIZE: usize = BLOCK_LEN;
  type Output = [u8; OUTPUT_LEN];

  #[inline]
  fn digest(data: &[u8]) -> Self::Output {
    Self::default().hash(data)
  }

  #[inline]
  fn try_digest(data: &[u8]) -> Result<Self::Output, MessageTooLong> {
    Self::default().hash_checked(data)
  }
}

#[inline]
fn run(compress_block: CompressBlockFn, blocks: PaddedBlocks<'_>) -> [u8; OUTPUT_LEN] {
  let mut state = H0;
  for block in blocks {
    compress_block(&mut state, block.as_array());
  }
  store_be_words(&state)
}
