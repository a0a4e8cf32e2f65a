use super::*;
use crate::try_split_off_byte_array;
use core::fmt::Debug;

/// A chunk record borrowed out of a PNG byte stream.
///
/// The tag lives in `ty` and `data` is the payload alone. The CRC is
/// carried exactly as it was read, never checked; call
/// [`compute_actual_crc`](Self::compute_actual_crc) to see what the value
/// should have been.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PngRawChunk<'b> {
  pub(crate) ty: PngChunkTy,
  pub(crate) data: &'b [u8],
  pub(crate) declared_crc: u32,
}
impl<'b> PngRawChunk<'b> {
  /// The chunk's type tag.
  #[inline]
  #[must_use]
  pub const fn ty(self) -> PngChunkTy {
    self.ty
  }
  /// The payload bytes (tag not included).
  #[inline]
  #[must_use]
  pub const fn data(self) -> &'b [u8] {
    self.data
  }
  /// The CRC value the record carried.
  #[inline]
  #[must_use]
  pub const fn declared_crc(self) -> u32 {
    self.declared_crc
  }
  /// The CRC-32 of the tag and payload actually present.
  ///
  /// Equal to [`declared_crc`](Self::declared_crc) when the record is
  /// intact.
  #[inline]
  #[must_use]
  pub fn compute_actual_crc(self) -> u32 {
    png_crc(&[&self.ty.0, self.data])
  }
}
impl Debug for PngRawChunk<'_> {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("PngRawChunk")
      .field("ty", &self.ty)
      .field("data", &(&self.data[..self.data.len().min(12)], self.data.len()))
      .field("declared_crc", &self.declared_crc)
      .finish()
  }
}

/// An iterator that produces successive raw chunks from PNG bytes.
///
/// This is the permissive way to walk chunk records: if the remaining bytes
/// can't hold one more complete record the iteration simply ends, and
/// nothing is ever validated. Strict parsing with actual errors is
/// [`PngImage::parse`](super::PngImage::parse).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct PngRawChunkIter<'b>(&'b [u8]);
impl<'b> PngRawChunkIter<'b> {
  /// Pass the full PNG bytes, it will remove the signature automatically.
  ///
  /// The signature bytes aren't checked. If they're wrong you probably
  /// don't have PNG data and the "chunks" produced will be nonsense, but
  /// walking them stays safe.
  #[inline]
  pub const fn new(bytes: &'b [u8]) -> Self {
    match bytes {
      [_, _, _, _, _, _, _, _, rest @ ..] => Self(rest),
      _ => Self(&[]),
    }
  }
}
impl<'b> Iterator for PngRawChunkIter<'b> {
  type Item = PngRawChunk<'b>;
  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    match take_raw_chunk(self.0) {
      Some((chunk, rest)) => {
        self.0 = rest;
        Some(chunk)
      }
      None => {
        self.0 = &[];
        None
      }
    }
  }
}

/// Splits one chunk record off the front of the bytes.
///
/// `None` when the bytes can't hold a complete record: a short length
/// prefix, a short tag, fewer payload bytes than the prefix declares, or a
/// short CRC. The length comparison is done in `u64` so that a hostile
/// length prefix near `u32::MAX` can't wrap anything.
pub(crate) fn take_raw_chunk(bytes: &[u8]) -> Option<(PngRawChunk<'_>, &[u8])> {
  let (len_bytes, rest) = try_split_off_byte_array::<4>(bytes)?;
  let len = u32::from_be_bytes(len_bytes);
  let (ty_bytes, rest) = try_split_off_byte_array::<4>(rest)?;
  if (rest.len() as u64) < u64::from(len) + 4 {
    return None;
  }
  let (data, rest) = rest.split_at(len as usize);
  let (crc_bytes, rest) = try_split_off_byte_array::<4>(rest)?;
  let chunk = PngRawChunk {
    ty: PngChunkTy(ty_bytes),
    data,
    declared_crc: u32::from_be_bytes(crc_bytes),
  };
  Some((chunk, rest))
}
