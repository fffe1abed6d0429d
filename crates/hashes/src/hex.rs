//! Lowercase hexadecimal rendering of 32-byte digests.
//!
//! The rendering lives in a fixed stack buffer, so it works without `alloc`.

use core::fmt;

const ALPHABET: &[u8; 16] = b"0123456789abcdef";

/// A 32-byte digest rendered as 64 lowercase ASCII hex digits.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexDigest {
  buf: [u8; 64],
}

impl HexDigest {
  /// Number of hex characters.
  pub const LEN: usize = 64;

  /// The digits as a string slice.
  #[inline]
  #[must_use]
  pub fn as_str(&self) -> &str {
    // The buffer only ever holds bytes from `ALPHABET`.
    core::str::from_utf8(&self.buf).unwrap_or_default()
  }

  /// The digits as ASCII bytes.
  #[inline]
  #[must_use]
  pub const fn as_bytes(&self) -> &[u8; 64] {
    &self.buf
  }
}

/// Render `bytes` as lowercase hex, two digits per byte, most significant
/// nibble first.
#[must_use]
pub fn encode(bytes: &[u8; 32]) -> HexDigest {
  let mut buf = [0u8; 64];
  let (pairs, _) = buf.as_chunks_mut::<2>();
  for (pair, &b) in pairs.iter_mut().zip(bytes) {
    *pair = [nibble(b >> 4), nibble(b & 0x0f)];
  }
  HexDigest { buf }
}

#[inline(always)]
fn nibble(n: u8) -> u8 {
  ALPHABET.get(usize::from(n)).copied().unwrap_or(b'0')
}

impl fmt::Display for HexDigest {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl fmt::Debug for HexDigest {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("HexDigest").field(&self.as_str()).finish()
  }
}

impl PartialEq<&str> for HexDigest {
  fn eq(&self, other: &&str) -> bool {
    self.as_str() == *other
  }
}

impl PartialEq<str> for HexDigest {
  fn eq(&self, other: &str) -> bool {
    self.as_str() == other
  }
}

impl AsRef<str> for HexDigest {
  fn as_ref(&self) -> &str {
    self.as_str()
  }
}
