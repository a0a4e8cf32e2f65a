//! Module for working with PNG data at the chunk level.
//!
//! * [Portable Network Graphics Specification (Second Edition)][png-spec]
//!
//! [png-spec]: https://www.w3.org/TR/2003/REC-PNG-20031110/
//!
//! A PNG data stream is an 8-byte signature followed by a series of
//! "chunks". Each chunk is a big-endian length prefix, a 4-byte ASCII tag,
//! `length` bytes of payload, and a big-endian CRC covering the tag and the
//! payload. This module works with that *structure* only:
//!
//! * [`PngRawChunkIter`] walks the chunk records of a byte slice without
//!   allocating anything. It's permissive: when the bytes can't hold another
//!   whole record it just stops, so it's useful for inspecting data of
//!   unknown quality.
//! * [`PngImage`] (needs the `alloc` feature) owns a parsed chunk sequence
//!   plus whatever bytes trailed the final chunk. Unlike the iterator it
//!   parses strictly, erroring on a bad signature or a truncated record.
//!   An unedited image serializes back to its input byte-for-byte, and the
//!   one edit offered is setting the physical pixel density ([`pHYs`]).
//!
//! Payloads other than the `pHYs` layout are never interpreted, and stored
//! CRC values are never checked during parsing. A file with a mismatched
//! checksum parses fine and re-serializes with the same mismatched
//! checksum. Only chunks built fresh by this crate get a computed CRC.

mod crc32;
pub(crate) use crc32::*;

mod chunk;
pub use chunk::*;

mod raw_chunk;
pub use raw_chunk::*;

mod phys;
pub use phys::*;

#[cfg(feature = "alloc")]
mod image;
#[cfg(feature = "alloc")]
pub use image::*;


/// The first eight bytes of a PNG data stream should match these bytes.
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Checks if the bytes begin with the PNG signature.
#[inline]
#[must_use]
pub const fn is_png_signature_correct(bytes: &[u8]) -> bool {
  matches!(bytes, [137, 80, 78, 71, 13, 10, 26, 10, ..])
}
