//! Error types for digest operations.
//!
//! Hashing itself is total; the only rejectable condition is a message whose
//! length cannot be encoded by the algorithm.

use core::fmt;

/// The message is too long for the digest's length field.
///
/// SHA-256 appends the message length in bits as a 64-bit integer, so any
/// message of `2^61` bytes or more cannot be encoded exactly.
///
/// # Examples
///
/// ```
/// use traits::MessageTooLong;
///
/// fn bit_length(len: u64) -> Result<u64, MessageTooLong> {
///   len.checked_mul(8).ok_or(MessageTooLong::new(len))
/// }
///
/// assert_eq!(bit_length(3), Ok(24));
/// assert!(bit_length(1 << 61).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct MessageTooLong {
  len: u64,
}

impl MessageTooLong {
  /// Create a new error for a message of `len` bytes.
  #[inline]
  #[must_use]
  pub const fn new(len: u64) -> Self {
    Self { len }
  }

  /// Length in bytes of the rejected message.
  #[inline]
  #[must_use]
  pub const fn message_len(&self) -> u64 {
    self.len
  }
}

impl fmt::Display for MessageTooLong {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "message of {} bytes exceeds the 2^64-bit length limit", self.len)
  }
}

impl core::error::Error for MessageTooLong {}
