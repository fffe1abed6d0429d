//! Register-rotating block compressor.
//!
//! Keeps only a 16-word ring of the message schedule and never moves the
//! working variables: each round writes its two new values into the slots of
//! `d` and `h`, and the next round reads the eight names shifted by one. After
//! eight rounds the names line up again.
#![allow(clippy::indexing_slicing)] // Ring indices are masked to 0..16, round indices bounded by 64

use super::{
  compress::{big_sigma0, big_sigma1, ch, maj},
  constants::{BLOCK_LEN, K},
  schedule::{small_sigma0, small_sigma1},
};
use crate::util::load_be_words;

/// Compress one block into `state` in place.
#[inline]
pub(crate) fn compress_block(state: &mut [u32; 8], block: &[u8; BLOCK_LEN]) {
  let mut w = load_be_words(block);
  let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

  macro_rules! round {
    ($a:ident, $b:ident, $c:ident, $d:ident, $e:ident, $f:ident, $g:ident, $h:ident, $i:expr) => {{
      let i = $i;
      if i >= 16 {
        w[i & 15] = w[i & 15]
          .wrapping_add(small_sigma0(w[(i + 1) & 15]))
          .wrapping_add(w[(i + 9) & 15])
          .wrapping_add(small_sigma1(w[(i + 14) & 15]));
      }
      let t1 = $h
        .wrapping_add(big_sigma1($e))
        .wrapping_add(ch($e, $f, $g))
        .wrapping_add(K[i])
        .wrapping_add(w[i & 15]);
      let t2 = big_sigma0($a).wrapping_add(maj($a, $b, $c));
      $d = $d.wrapping_add(t1);
      $h = t1.wrapping_add(t2);
    }};
  }

  for base in (0..64).step_by(8) {
    round!(a, b, c, d, e, f, g, h, base);
    round!(h, a, b, c, d, e, f, g, base + 1);
    round!(g, h, a, b, c, d, e, f, base + 2);
    round!(f, g, h, a, b, c, d, e, base + 3);
    round!(e, f, g, h, a, b, c, d, base + 4);
    round!(d, e, f, g, h, a, b, c, base + 5);
    round!(c, d, e, f, g, h, a, b, base + 6);
    round!(b, c, d, e, f, g, h, a, base + 7);
  }

  for (word, v) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
    *word = word.wrapping_add(v);
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::crypto::sha256::{compress::compress, constants::H0, schedule::expand};

  fn block_from(seed: u8) -> [u8; BLOCK_LEN] {
    let mut block = [0u8; BLOCK_LEN];
    for (i, b) in block.iter_mut().enumerate() {
      *b = (i as u8).wrapping_mul(seed).wrapping_add(seed >> 1);
    }
    block
  }

  #[test]
  fn matches_full_schedule_compression() {
    for seed in [0u8, 1, 7, 31, 128, 255] {
      let block = block_from(seed);
      let mut state = H0;
      compress_block(&mut state, &block);
      assert_eq!(state, compress(&H0, &expand(&block), &K), "seed={seed}");
    }
  }

  #[test]
  fn chains_across_blocks() {
    let mut ours = H0;
    let mut reference = H0;
    for seed in 1..=16u8 {
      let block = block_from(seed);
      compress_block(&mut ours, &block);
      reference = compress(&reference, &expand(&block), &K);
    }
    assert_eq!(ours, reference);
  }
}
