/// 32-bit right rotation. `n` is taken modulo 32, so `rotr32(x, 0) == x`.
#[inline(always)]
pub const fn rotr32(x: u32, n: u32) -> u32 {
  x.rotate_right(n)
}

/// Big-endian 32-bit words of a 64-byte block.
#[inline(always)]
pub fn load_be_words(block: &[u8; 64]) -> [u32; 16] {
  let mut w = [0u32; 16];
  let (chunks, _) = block.as_chunks::<4>();
  for (word, c) in w.iter_mut().zip(chunks) {
    *word = u32::from_be_bytes(*c);
  }
  w
}

/// Serialize the eight state words big-endian.
#[inline]
pub fn store_be_words(state: &[u32; 8]) -> [u8; 32] {
  let mut out = [0u8; 32];
  let (chunks, _) = out.as_chunks_mut::<4>();
  for (c, word) in chunks.iter_mut().zip(state) {
    *c = word.to_be_bytes();
  }
  out
}
