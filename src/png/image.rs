use super::*;
use crate::{RechunkError, RechunkResult};
use alloc::vec::Vec;

/// A PNG file as an editable sequence of chunks.
///
/// Parsing keeps every chunk exactly as it appeared, CRC included, plus any
/// bytes that trailed the final chunk, so an image you don't edit
/// serializes back to its input byte-for-byte. The 8-byte signature isn't
/// stored: [`to_vec`](Self::to_vec) and [`write_into`](Self::write_into)
/// always emit the standard one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PngImage {
  chunks: Vec<PngChunk>,
  trailer: Vec<u8>,
}
impl PngImage {
  /// Parses the chunk structure out of PNG bytes.
  ///
  /// Chunks are consumed until an `IEND` chunk is taken or the input runs
  /// out, whichever is first. Input ending without an `IEND` is accepted.
  /// Bytes past the `IEND` chunk become the trailer, even if they happen to
  /// look like more chunks.
  ///
  /// ## Failure
  /// * `Signature` if the input doesn't start with the PNG signature.
  /// * `TruncatedChunk` if a chunk record says it extends past the end of
  ///   the input.
  pub fn parse(bytes: &[u8]) -> RechunkResult<Self> {
    let mut rest = match bytes {
      [137, 80, 78, 71, 13, 10, 26, 10, rest @ ..] => rest,
      _ => return Err(RechunkError::Signature),
    };
    let mut chunks: Vec<PngChunk> = Vec::new();
    while !rest.is_empty() {
      let (raw, spare) = match take_raw_chunk(rest) {
        Some(pair) => pair,
        None => return Err(RechunkError::TruncatedChunk),
      };
      rest = spare;
      let hit_end = raw.ty() == PngChunkTy::IEND;
      chunks.push(PngChunk::from(raw));
      if hit_end {
        break;
      }
    }
    Ok(Self { chunks, trailer: rest.to_vec() })
  }

  /// The chunk sequence, in file order.
  #[inline]
  #[must_use]
  pub fn chunks(&self) -> &[PngChunk] {
    &self.chunks
  }
  /// Bytes that followed the final chunk. Usually empty.
  #[inline]
  #[must_use]
  pub fn trailer(&self) -> &[u8] {
    &self.trailer
  }
  /// Exact number of bytes the serialized form takes.
  #[inline]
  #[must_use]
  pub fn byte_len(&self) -> usize {
    // each chunk is data plus the 4-byte length prefix and 4-byte CRC
    8 + self.chunks.iter().map(|c| c.data().len() + 8).sum::<usize>() + self.trailer.len()
  }

  /// Serializes the image to a fresh byte vector.
  ///
  /// Chunks come out in sequence order with their stored length and CRC
  /// fields untouched, then the trailer verbatim. Nothing is dropped,
  /// reordered, or re-checksummed.
  #[must_use]
  pub fn to_vec(&self) -> Vec<u8> {
    let mut out = Vec::with_capacity(self.byte_len());
    out.extend_from_slice(&PNG_SIGNATURE);
    for chunk in self.chunks.iter() {
      out.extend_from_slice(&chunk.length().to_be_bytes());
      out.extend_from_slice(chunk.data());
      out.extend_from_slice(&chunk.crc().to_be_bytes());
    }
    out.extend_from_slice(&self.trailer);
    out
  }

  /// Serializes the image into a caller-provided sink, returning the byte
  /// count written.
  ///
  /// ## Failure
  /// * `IncompleteWrite` if the sink can't hold [`byte_len`](Self::byte_len)
  ///   bytes. The sink is refused up front and left untouched: a short
  ///   write must never pass for a valid image.
  pub fn write_into(&self, sink: &mut [u8]) -> RechunkResult<usize> {
    let total = self.byte_len();
    if sink.len() < total {
      return Err(RechunkError::IncompleteWrite);
    }
    let mut sink = put(sink, &PNG_SIGNATURE);
    for chunk in self.chunks.iter() {
      sink = put(sink, &chunk.length().to_be_bytes());
      sink = put(sink, chunk.data());
      sink = put(sink, &chunk.crc().to_be_bytes());
    }
    put(sink, &self.trailer);
    Ok(total)
  }

  /// Ensures the sequence carries `chunk`, replacing or inserting as needed.
  ///
  /// Two passes, in order:
  /// 1. If a chunk with `chunk`'s own type tag already exists, the first
  ///    one is replaced at its exact position, wherever that is.
  /// 2. Otherwise `chunk` is inserted directly ahead of the first chunk
  ///    whose tag is `anchor`.
  ///
  /// ## Failure
  /// * `MissingTargetChunk` when there's no same-type chunk and no anchor
  ///   chunk either. The sequence is left exactly as it was.
  pub fn replace_or_insert_before(
    &mut self, chunk: PngChunk, anchor: PngChunkTy,
  ) -> RechunkResult<()> {
    let ty = chunk.ty();
    if let Some(i) = self.chunks.iter().position(|c| c.ty() == ty) {
      self.chunks[i] = chunk;
      return Ok(());
    }
    match self.chunks.iter().position(|c| c.ty() == anchor) {
      Some(i) => {
        self.chunks.insert(i, chunk);
        Ok(())
      }
      None => Err(RechunkError::MissingTargetChunk),
    }
  }

  /// Sets the image's physical pixel density.
  ///
  /// An existing `pHYs` chunk is replaced where it sits, keeping its
  /// position even when a malformed source put it somewhere the PNG spec
  /// wouldn't allow. Otherwise the new chunk goes directly ahead of the
  /// first `IDAT`, which is where the spec wants it.
  ///
  /// ## Failure
  /// * `MissingTargetChunk` when the image has no `pHYs` chunk and no
  ///   `IDAT` chunk either, leaving the image unmodified.
  #[inline]
  pub fn set_phys_chunk(&mut self, phys: pHYs) -> RechunkResult<()> {
    self.replace_or_insert_before(phys.to_chunk(), PngChunkTy::IDAT)
  }
}

/// Copies `bytes` to the front of `sink`, returning the rest of `sink`.
///
/// The caller has already sized the sink, so the split can't fail.
fn put<'s>(sink: &'s mut [u8], bytes: &[u8]) -> &'s mut [u8] {
  let (head, rest) = sink.split_at_mut(bytes.len());
  head.copy_from_slice(bytes);
  rest
}
