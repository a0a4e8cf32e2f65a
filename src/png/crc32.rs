//! The CRC-32 that PNG uses (IEEE 802.3 polynomial, reflected).
//!
//! A chunk's CRC covers the 4-byte tag and the payload, not the length
//! prefix and not the CRC field itself.

const CRC_TABLE: [u32; 256] = {
  let mut table = [0_u32; 256];
  let mut n = 0;
  while n < 256 {
    let mut c = n as u32;
    let mut k = 0;
    while k < 8 {
      c = if (c & 1) != 0 { 0xEDB8_8320 ^ (c >> 1) } else { c >> 1 };
      //
      k += 1;
    }
    table[n] = c;
    //
    n += 1;
  }
  table
};

/// CRC-32 of all the given slices, processed in order as one byte stream.
///
/// Taking multiple slices lets a chunk's tag and payload be checksummed
/// together without first concatenating them anywhere.
#[inline]
#[must_use]
pub(crate) fn png_crc(byte_slices: &[&[u8]]) -> u32 {
  let mut c = u32::MAX;
  for slice in byte_slices.iter().copied() {
    for byte in slice.iter().copied() {
      c = CRC_TABLE[((c ^ u32::from(byte)) & 0xFF) as usize] ^ (c >> 8);
    }
  }
  c ^ u32::MAX
}
