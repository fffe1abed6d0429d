//! Message schedule expansion (FIPS 180-4 §6.2.2 step 1).
#![allow(clippy::indexing_slicing)] // Fixed 64-word schedule, indices are loop-bounded

use super::constants::BLOCK_LEN;
use crate::util::{load_be_words, rotr32};

/// Schedule length: one word per compression round.
pub const SCHEDULE_LEN: usize = 64;

#[inline(always)]
pub(crate) fn small_sigma0(x: u32) -> u32 {
  rotr32(x, 7) ^ rotr32(x, 18) ^ (x >> 3)
}

#[inline(always)]
pub(crate) fn small_sigma1(x: u32) -> u32 {
  rotr32(x, 17) ^ rotr32(x, 19) ^ (x >> 10)
}

/// Expand one block into its 64-word schedule.
///
/// Words 0..16 are the block read big-endian; every later word mixes four
/// earlier ones with wrapping addition.
#[must_use]
pub fn expand(block: &[u8; BLOCK_LEN]) -> [u32; SCHEDULE_LEN] {
  let mut w = [0u32; SCHEDULE_LEN];
  w[..16].copy_from_slice(&load_be_words(block));
  for i in 16..SCHEDULE_LEN {
    w[i] = w[i - 16]
      .wrapping_add(small_sigma0(w[i - 15]))
      .wrapping_add(w[i - 7])
      .wrapping_add(small_sigma1(w[i - 2]));
  }
  w
}
