//! Cryptographic digest traits.
//!
//! Digests here are one-shot: the whole message is borrowed for the duration
//! of a single call and nothing is retained between calls.

use core::fmt::Debug;

use crate::MessageTooLong;

/// Cryptographic hash function producing a fixed-size digest.
///
/// Implementations are pure functions of their input. Two calls with the same
/// bytes return the same output, and independent calls share no state, so
/// they may run concurrently without synchronization.
pub trait Digest {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// Compression block size in bytes.
  const BLOCK_SIZE: usize;

  /// The digest output type.
  ///
  /// Typically `[u8; N]`.
  type Output: Copy + Eq + Debug;

  /// Compute the digest of `data` in one shot.
  ///
  /// Total over every slice that fits in memory.
  #[must_use]
  fn digest(data: &[u8]) -> Self::Output;

  /// Compute the digest of `data`, rejecting messages whose length cannot be
  /// encoded in the algorithm's length field.
  ///
  /// The default accepts everything.
  ///
  /// # Errors
  ///
  /// Returns [`MessageTooLong`] when the implementation cannot encode the
  /// message length exactly.
  #[inline]
  fn try_digest(data: &[u8]) -> Result<Self::Output, MessageTooLong> {
    Ok(Self::digest(data))
  }
}
