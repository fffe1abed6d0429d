//! The 64-round compression function (FIPS 180-4 §6.2.2 steps 2-4).
#![allow(clippy::indexing_slicing)] // Fixed-size arrays + compression schedule

use super::schedule::SCHEDULE_LEN;
use crate::util::rotr32;

#[inline(always)]
pub(crate) fn ch(x: u32, y: u32, z: u32) -> u32 {
  (x & y) ^ (!x & z)
}

#[inline(always)]
pub(crate) fn maj(x: u32, y: u32, z: u32) -> u32 {
  (x & y) ^ (x & z) ^ (y & z)
}

#[inline(always)]
pub(crate) fn big_sigma0(x: u32) -> u32 {
  rotr32(x, 2) ^ rotr32(x, 13) ^ rotr32(x, 22)
}

#[inline(always)]
pub(crate) fn big_sigma1(x: u32) -> u32 {
  rotr32(x, 6) ^ rotr32(x, 11) ^ rotr32(x, 25)
}

/// Run 64 rounds of `w` and `k` over `state` and return the new state.
///
/// The input state is added back word by word at the end, so the result is
/// the chaining value for the next block.
#[must_use]
pub fn compress(state: &[u32; 8], w: &[u32; SCHEDULE_LEN], k: &[u32; SCHEDULE_LEN]) -> [u32; 8] {
  let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

  for i in 0..SCHEDULE_LEN {
    let t1 = h
      .wrapping_add(big_sigma1(e))
      .wrapping_add(ch(e, f, g))
      .wrapping_add(k[i])
      .wrapping_add(w[i]);
    let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

    h = g;
    g = f;
    f = e;
    e = d.wrapping_add(t1);
    d = c;
    c = b;
    b = a;
    a = t1.wrapping_add(t2);
  }

  let mut out = *state;
  for (word, v) in out.iter_mut().zip([a, b, c, d, e, f, g, h]) {
    *word = word.wrapping_add(v);
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::crypto::sha256::{
    constants::{H0, K},
    schedule::expand,
  };

  #[test]
  fn abc_single_block_state() {
    let mut block = [0u8; 64];
    block[..4].copy_from_slice(&[0x61, 0x62, 0x63, 0x80]);
    block[63] = 0x18;

    let out = compress(&H0, &expand(&block), &K);
    assert_eq!(
      out,
      [0xba7816bf, 0x8f01cfea, 0x414140de, 0x5dae2223, 0xb00361a3, 0x96177a9c, 0xb410ff61, 0xf20015ad]
    );
  }

  #[test]
  fn boolean_functions() {
    assert_eq!(ch(0xffff_0000, 0x1234_5678, 0x9abc_def0), 0x1234_def0);
    assert_eq!(maj(0xff00_ff00, 0x0f0f_0f0f, 0x00ff_00ff), 0x0f0f_0f0f);
    assert_eq!(maj(0, 0, u32::MAX), 0);
    assert_eq!(maj(u32::MAX, 0, u32::MAX), u32::MAX);
  }

  #[test]
  fn big_sigmas_of_one() {
    assert_eq!(big_sigma0(1), (1u32 << 30) | (1u32 << 19) | (1u32 << 10));
    assert_eq!(big_sigma1(1), (1u32 << 26) | (1u32 << 21) | (1u32 << 7));
  }

  #[test]
  fn wraps_instead_of_overflowing() {
    let state = [u32::MAX; 8];
    let w = [u32::MAX; SCHEDULE_LEN];
    let k = [u32::MAX; SCHEDULE_LEN];
    assert_eq!(compress(&state, &w, &k), compress(&state, &w, &k));
  }

  #[test]
  fn all_ones_block_matches_ring_kernel() {
    let block = [0xffu8; 64];
    let w = expand(&block);
    assert!(w[..16].iter().all(|&x| x == u32::MAX));

    let mut ring = [u32::MAX; 8];
    crate::crypto::sha256::portable::compress_block(&mut ring, &block);
    assert_eq!(compress(&[u32::MAX; 8], &w, &K), ring);

    let mut ring = H0;
    crate::crypto::sha256::portable::compress_block(&mut ring, &block);
    assert_eq!(compress(&H0, &w, &K), ring);
  }

  #[test]
  fn feed_forward_adds_input_state() {
    let w = [0u32; SCHEDULE_LEN];
    let base = compress(&[0u32; 8], &w, &K);
    assert_ne!(compress(&H0, &w, &K), base);
  }
}
