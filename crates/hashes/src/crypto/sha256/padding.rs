//! Message padding and block segmentation (FIPS 180-4 §5.1.1, §5.2.1).
//!
//! A message is extended with a single `0x80` byte, zero bytes until its
//! length is 56 mod 64, and the original length in bits as a big-endian
//! `u64`. The result splits into 64-byte blocks with no remainder.
//!
//! [`pad`] builds that padded message literally. [`PaddedBlocks`] yields the
//! identical block sequence without copying the message: full blocks are
//! borrowed in place and only the one or two tail blocks are materialized.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use traits::MessageTooLong;

use super::constants::{BLOCK_LEN, LENGTH_FIELD_LEN, LENGTH_FIELD_OFFSET};

/// Message length in bits, or an error if it does not fit in 64 bits.
///
/// # Errors
///
/// Returns [`MessageTooLong`] for messages of `2^61` bytes or more.
#[inline]
pub fn bit_length(len: usize) -> Result<u64, MessageTooLong> {
  let len = len as u64;
  len.checked_mul(8).ok_or(MessageTooLong::new(len))
}

/// Message length in bits modulo `2^64`.
#[inline]
#[must_use]
pub const fn wrapping_bit_length(len: usize) -> u64 {
  (len as u64).wrapping_mul(8)
}

/// Length in bytes of the padded message for a `len`-byte input.
#[inline]
#[must_use]
pub const fn padded_len(len: usize) -> usize {
  block_count(len) * BLOCK_LEN
}

/// Number of 64-byte blocks the padded message spans.
///
/// At least one byte of `0x80` marker and eight bytes of length must follow
/// the message, so `len` bytes need `ceil((len + 9) / 64)` blocks.
#[inline]
#[must_use]
pub const fn block_count(len: usize) -> usize {
  (len / BLOCK_LEN) + if len % BLOCK_LEN < LENGTH_FIELD_OFFSET { 1 } else { 2 }
}

/// Build the padded message for `message`.
#[cfg(feature = "alloc")]
#[must_use]
pub fn pad(message: &[u8]) -> Vec<u8> {
  let mut data = Vec::with_capacity(padded_len(message.len()));
  data.extend_from_slice(message);
  data.push(0x80);
  let zeros = (LENGTH_FIELD_OFFSET + BLOCK_LEN - data.len() % BLOCK_LEN) % BLOCK_LEN;
  data.resize(data.len() + zeros, 0);
  data.extend_from_slice(&wrapping_bit_length(message.len()).to_be_bytes());
  data
}

/// Split a padded message into its 64-byte blocks, in order.
///
/// A trailing partial chunk is never produced; given a buffer from [`pad`]
/// there is none.
pub fn segment(padded: &[u8]) -> impl ExactSizeIterator<Item = &[u8; BLOCK_LEN]> + '_ {
  debug_assert_eq!(padded.len() % BLOCK_LEN, 0, "padded message must be whole blocks");
  let (blocks, _) = padded.as_chunks::<BLOCK_LEN>();
  blocks.iter()
}

/// The padded block sequence of a message, produced without copying it.
#[derive(Clone, Debug)]
pub struct PaddedBlocks<'a> {
  full: core::slice::Iter<'a, [u8; BLOCK_LEN]>,
  tail: [[u8; BLOCK_LEN]; 2],
  tail_len: usize,
  tail_pos: usize,
}

impl<'a> PaddedBlocks<'a> {
  /// Segment `message`, encoding `bit_len` in the length field.
  #[must_use]
  pub fn new(message: &'a [u8], bit_len: u64) -> Self {
    let (full, rest) = message.as_chunks::<BLOCK_LEN>();

    let mut tail = [[0u8; BLOCK_LEN]; 2];
    let mut bytes = [0u8; 2 * BLOCK_LEN];
    let (head, _) = bytes.split_at_mut(rest.len());
    head.copy_from_slice(rest);

    let tail_len = if rest.len() < LENGTH_FIELD_OFFSET { 1 } else { 2 };
    let field_end = tail_len * BLOCK_LEN;
    if let Some(marker) = bytes.get_mut(rest.len()) {
      *marker = 0x80;
    }
    if let Some(field) = bytes.get_mut(field_end - LENGTH_FIELD_LEN..field_end) {
      field.copy_from_slice(&bit_len.to_be_bytes());
    }

    let (halves, _) = bytes.as_chunks::<BLOCK_LEN>();
    for (dst, src) in tail.iter_mut().zip(halves) {
      *dst = *src;
    }

    Self {
      full: full.iter(),
      tail,
      tail_len,
      tail_pos: 0,
    }
  }

  /// Number of blocks still to be yielded.
  #[inline]
  fn remaining(&self) -> usize {
    self.full.len() + (self.tail_len - self.tail_pos)
  }
}

impl<'a> Iterator for PaddedBlocks<'a> {
  type Item = Block<'a>;

  fn next(&mut self) -> Option<Self::Item> {
    if let Some(block) = self.full.next() {
      return Some(Block::Borrowed(block));
    }
    if self.tail_pos >= self.tail_len {
      return None;
    }
    let block = self.tail.get(self.tail_pos).copied()?;
    self.tail_pos += 1;
    Some(Block::Owned(block))
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    let n = self.remaining();
    (n, Some(n))
  }
}

impl ExactSizeIterator for PaddedBlocks<'_> {}

impl core::iter::FusedIterator for PaddedBlocks<'_> {}

/// One 64-byte block, either a view into the message or a padded tail block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Block<'a> {
  /// A full block taken directly from the message.
  Borrowed(&'a [u8; BLOCK_LEN]),
  /// A tail block holding padding and possibly the last message bytes.
  Owned([u8; BLOCK_LEN]),
}

impl Block<'_> {
  #[inline]
  #[must_use]
  pub fn as_array(&self) -> &[u8; BLOCK_LEN] {
    match self {
      Self::Borrowed(b) => b,
      Self::Owned(b) => b,
    }
  }
}
