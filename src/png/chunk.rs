use super::*;
use crate::AsciiArray;
use bitfrob::u8_get_bit;
use core::fmt::Debug;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// The 4-byte tag naming a PNG chunk's type.
///
/// Tags are intended to be ASCII letters, and the case of each letter is a
/// property bit. Nothing here enforces any of that: whatever four bytes sit
/// in the tag position of a chunk record are that chunk's tag.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct PngChunkTy(pub [u8; 4]);
#[allow(nonstandard_style)]
impl PngChunkTy {
  pub const IHDR: Self = Self(*b"IHDR");
  pub const PLTE: Self = Self(*b"PLTE");
  pub const IDAT: Self = Self(*b"IDAT");
  pub const IEND: Self = Self(*b"IEND");
  pub const pHYs: Self = Self(*b"pHYs");
  pub const tRNS: Self = Self(*b"tRNS");
}
impl PngChunkTy {
  /// Bit 5 of byte 0: set when the chunk is ancillary rather than critical.
  #[inline]
  #[must_use]
  pub const fn is_ancillary(self) -> bool {
    u8_get_bit(5, self.0[0])
  }
  /// Bit 5 of byte 1: set when the chunk type is private (not standardized).
  #[inline]
  #[must_use]
  pub const fn is_private(self) -> bool {
    u8_get_bit(5, self.0[1])
  }
  /// Bit 5 of byte 2: reserved, should be clear in current PNG data.
  #[inline]
  #[must_use]
  pub const fn is_reserved_bit_set(self) -> bool {
    u8_get_bit(5, self.0[2])
  }
  /// Bit 5 of byte 3: set when editors that don't recognize the chunk may
  /// still copy it along.
  #[inline]
  #[must_use]
  pub const fn is_safe_to_copy(self) -> bool {
    u8_get_bit(5, self.0[3])
  }
}
impl Debug for PngChunkTy {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    Debug::fmt(&AsciiArray(self.0), f)
  }
}
impl core::fmt::Display for PngChunkTy {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    core::fmt::Display::fmt(&AsciiArray(self.0), f)
  }
}

/// An owned PNG chunk record.
///
/// * `length` is the payload byte count, exactly as the record's length
///   prefix declared it. The tag is not counted.
/// * `data` holds the tag *and* the payload, `length + 4` bytes total.
/// * `crc` covers `data`. For a chunk that came out of a parse this is
///   whatever four bytes the input carried, with no verification done.
///   Only [`from_ty_and_payload`](Self::from_ty_and_payload) (and the
///   [`pHYs`] builder on top of it) computes a fresh value.
///
/// A chunk never changes once built. Editing a chunk sequence means
/// replacing whole entries, see
/// [`PngImage::replace_or_insert_before`](super::PngImage::replace_or_insert_before).
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg(feature = "alloc")]
pub struct PngChunk {
  length: u32,
  data: Vec<u8>,
  crc: u32,
}
#[cfg(feature = "alloc")]
impl PngChunk {
  /// Builds a chunk from parsed fields.
  ///
  /// `data` must already be tag + payload, with `length` matching.
  pub(crate) fn from_raw_parts(length: u32, data: Vec<u8>, crc: u32) -> Self {
    debug_assert_eq!(data.len(), length as usize + 4);
    Self { length, data, crc }
  }

  /// Builds a chunk of the given type around the payload, computing the CRC.
  #[inline]
  #[must_use]
  pub fn from_ty_and_payload(ty: PngChunkTy, payload: &[u8]) -> Self {
    debug_assert!(payload.len() <= u32::MAX as usize);
    let mut data = Vec::with_capacity(payload.len() + 4);
    data.extend_from_slice(&ty.0);
    data.extend_from_slice(payload);
    Self { length: payload.len() as u32, crc: png_crc(&[data.as_slice()]), data }
  }

  /// The chunk's type tag, the first four bytes of `data`.
  #[inline]
  #[must_use]
  pub fn ty(&self) -> PngChunkTy {
    PngChunkTy([self.data[0], self.data[1], self.data[2], self.data[3]])
  }
  /// The declared payload length (doesn't count the tag).
  #[inline]
  #[must_use]
  pub fn length(&self) -> u32 {
    self.length
  }
  /// Tag and payload together, as they sit on the wire.
  #[inline]
  #[must_use]
  pub fn data(&self) -> &[u8] {
    &self.data
  }
  /// The payload alone, without the tag.
  #[inline]
  #[must_use]
  pub fn payload(&self) -> &[u8] {
    &self.data[4..]
  }
  /// The stored CRC value.
  #[inline]
  #[must_use]
  pub fn crc(&self) -> u32 {
    self.crc
  }
}
#[cfg(feature = "alloc")]
impl Debug for PngChunk {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("PngChunk")
      .field("ty", &self.ty())
      .field("payload", &(&self.payload()[..self.payload().len().min(12)], self.length))
      .field("crc", &self.crc)
      .finish()
  }
}
#[cfg(feature = "alloc")]
impl From<PngRawChunk<'_>> for PngChunk {
  /// Copies a borrowed record into an owned chunk, keeping the declared CRC.
  #[inline]
  #[must_use]
  fn from(raw: PngRawChunk<'_>) -> Self {
    let mut data = Vec::with_capacity(raw.data.len() + 4);
    data.extend_from_slice(&raw.ty.0);
    data.extend_from_slice(raw.data);
    Self::from_raw_parts(raw.data.len() as u32, data, raw.declared_crc)
  }
}
