use super::*;
use crate::U32BE;
use bytemuck::{Pod, Zeroable};

/// `pHYs`: Physical pixel dimensions
///
/// Specifies the intended pixel size or aspect ratio for display of the
/// image. When `unit` is [`UNIT_METER`](Self::UNIT_METER) the densities are
/// pixels per meter. A `unit` of 0 means the two densities define an aspect
/// ratio only. The PNG spec defines no other unit values, but nothing here
/// rejects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(nonstandard_style)]
pub struct pHYs {
  /// Pixels per unit, X axis.
  pub ppu_x: u32,
  /// Pixels per unit, Y axis.
  pub ppu_y: u32,
  /// Unit specifier: 0 is "no unit", 1 is meters.
  pub unit: u8,
}
impl pHYs {
  /// The `unit` value meaning the densities are per meter.
  pub const UNIT_METER: u8 = 1;

  /// Packs the values into a freshly checksummed chunk.
  ///
  /// The payload is 9 bytes: big-endian X density, big-endian Y density,
  /// then the unit byte.
  #[cfg(feature = "alloc")]
  #[inline]
  #[must_use]
  pub fn to_chunk(self) -> PngChunk {
    let body = PhysChunkBody {
      ppu_x: U32BE::from_u32(self.ppu_x),
      ppu_y: U32BE::from_u32(self.ppu_y),
      unit: self.unit,
    };
    PngChunk::from_ty_and_payload(PngChunkTy::pHYs, bytemuck::bytes_of(&body))
  }
}
impl<'b> TryFrom<PngRawChunk<'b>> for pHYs {
  type Error = ();
  #[inline]
  fn try_from(raw: PngRawChunk<'b>) -> Result<Self, Self::Error> {
    if raw.ty() != PngChunkTy::pHYs {
      return Err(());
    }
    let body: PhysChunkBody = bytemuck::try_pod_read_unaligned(raw.data()).map_err(|_| ())?;
    Ok(Self { ppu_x: body.ppu_x.to_u32(), ppu_y: body.ppu_y.to_u32(), unit: body.unit })
  }
}
#[cfg(feature = "alloc")]
impl TryFrom<&PngChunk> for pHYs {
  type Error = ();
  #[inline]
  fn try_from(chunk: &PngChunk) -> Result<Self, Self::Error> {
    if chunk.ty() != PngChunkTy::pHYs {
      return Err(());
    }
    let body: PhysChunkBody = bytemuck::try_pod_read_unaligned(chunk.payload()).map_err(|_| ())?;
    Ok(Self { ppu_x: body.ppu_x.to_u32(), ppu_y: body.ppu_y.to_u32(), unit: body.unit })
  }
}

/// Wire layout of a `pHYs` payload. Alignment 1 throughout, 9 bytes total.
#[derive(Clone, Copy, Zeroable, Pod)]
#[repr(C)]
struct PhysChunkBody {
  ppu_x: U32BE,
  ppu_y: U32BE,
  unit: u8,
}
