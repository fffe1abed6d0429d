use super::{
  compress::compress,
  constants::{BLOCK_LEN, K},
  portable,
  schedule::expand,
};

pub(crate) type CompressBlockFn = fn(&mut [u32; 8], &[u8; BLOCK_LEN]);

/// Block compression strategy.
///
/// Every kernel computes the same function; they differ only in how the
/// schedule and working variables are held.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Sha256KernelId {
  /// Full 64-word schedule, then 64 rounds with explicit variable shifts.
  Reference = 0,
  /// 16-word ring schedule with rotating register names.
  #[default]
  Portable = 1,
}

pub const ALL: &[Sha256KernelId] = &[Sha256KernelId::Reference, Sha256KernelId::Portable];

impl Sha256KernelId {
  #[inline]
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Reference => "reference",
      Self::Portable => "portable",
    }
  }
}

impl core::fmt::Display for Sha256KernelId {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_str(self.as_str())
  }
}

#[must_use]
pub fn id_from_name(name: &str) -> Option<Sha256KernelId> {
  ALL.iter().copied().find(|id| id.as_str() == name)
}

#[must_use]
pub(crate) fn compress_block_fn(id: Sha256KernelId) -> CompressBlockFn {
  match id {
    Sha256KernelId::Reference => compress_block_reference,
    Sha256KernelId::Portable => portable::compress_block,
  }
}

fn compress_block_reference(state: &mut [u32; 8], block: &[u8; BLOCK_LEN]) {
  *state = compress(state, &expand(block), &K);
}
