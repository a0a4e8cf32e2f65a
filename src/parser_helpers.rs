#![forbid(unsafe_code)]

//! Just has shorthands for various byte parsing things you'd want to do.

/// Splits a byte array off the front of the slice, if it's long enough.
pub fn try_split_off_byte_array<const N: usize>(bytes: &[u8]) -> Option<([u8; N], &[u8])> {
  if bytes.len() >= N {
    let (head, tail) = bytes.split_at(N);
    let a: [u8; N] = head.try_into().unwrap();
    Some((a, tail))
  } else {
    None
  }
}
