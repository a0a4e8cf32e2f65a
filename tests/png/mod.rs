use rechunk::png::{pHYs, PngChunk, PngChunkTy, PngImage, PngRawChunkIter, PNG_SIGNATURE};
use rechunk::RechunkError;
use walkdir::WalkDir;

/// One whole chunk record: length prefix, tag, payload, CRC as given.
fn chunk_record(ty: &[u8; 4], payload: &[u8], crc: u32) -> Vec<u8> {
  let mut out = Vec::new();
  out.extend_from_slice(&(payload.len() as u32).to_be_bytes());
  out.extend_from_slice(ty);
  out.extend_from_slice(payload);
  out.extend_from_slice(&crc.to_be_bytes());
  out
}

const IHDR_PAYLOAD: [u8; 13] = [0, 0, 0, 1, 0, 0, 0, 1, 8, 2, 0, 0, 0];
const IHDR_CRC: u32 = 0x9077_53DE;

/// Signature + IHDR + the given records + IDAT + IEND.
///
/// The IDAT carries a junk CRC on purpose: parsing must not care.
fn demo_png(mid_records: &[Vec<u8>]) -> Vec<u8> {
  let mut out = Vec::new();
  out.extend_from_slice(&PNG_SIGNATURE);
  out.extend_from_slice(&chunk_record(b"IHDR", &IHDR_PAYLOAD, IHDR_CRC));
  for record in mid_records {
    out.extend_from_slice(record);
  }
  out.extend_from_slice(&chunk_record(b"IDAT", &[1, 2, 3, 4, 5], 0xDEAD_BEEF));
  out.extend_from_slice(&chunk_record(b"IEND", &[], 0xAE42_6082));
  out
}

fn tags_of(image: &PngImage) -> Vec<PngChunkTy> {
  image.chunks().iter().map(|c| c.ty()).collect()
}

#[test]
fn test_parse_requires_the_signature() {
  assert_eq!(PngImage::parse(&[]), Err(RechunkError::Signature));
  assert_eq!(PngImage::parse(b"JFIF not a png"), Err(RechunkError::Signature));
  // one signature byte off is enough to refuse
  let mut bytes = demo_png(&[]);
  bytes[0] = 0x88;
  assert_eq!(PngImage::parse(&bytes), Err(RechunkError::Signature));
}

#[test]
fn test_parse_of_bare_signature_is_an_empty_image() {
  let image = PngImage::parse(&PNG_SIGNATURE).unwrap();
  assert!(image.chunks().is_empty());
  assert!(image.trailer().is_empty());
  assert_eq!(image.to_vec(), &PNG_SIGNATURE);
}

#[test]
fn test_parse_detects_truncation() {
  // length says 5 bytes of payload but only 3 bytes follow the prefix
  let mut bytes = PNG_SIGNATURE.to_vec();
  bytes.extend_from_slice(&[0, 0, 0, 5]);
  bytes.extend_from_slice(&[b'I', b'D', b'A']);
  assert_eq!(PngImage::parse(&bytes), Err(RechunkError::TruncatedChunk));
  // a length prefix that is itself cut short
  let mut bytes = PNG_SIGNATURE.to_vec();
  bytes.extend_from_slice(&[0, 0]);
  assert_eq!(PngImage::parse(&bytes), Err(RechunkError::TruncatedChunk));
  // a whole file cut anywhere inside the final chunk
  let whole = demo_png(&[]);
  for cut in (whole.len() - 11)..whole.len() {
    assert_eq!(PngImage::parse(&whole[..cut]), Err(RechunkError::TruncatedChunk), "cut {cut}");
  }
}

#[test]
fn test_round_trip_is_byte_exact() {
  // junk CRCs and all, the bytes must come back out untouched
  let bytes = demo_png(&[chunk_record(b"tEXt", b"k\0v", 0x1234_5678)]);
  let image = PngImage::parse(&bytes).unwrap();
  assert_eq!(image.to_vec(), bytes);
  // the junk CRC is stored as found, not recomputed
  let idat = image.chunks().iter().find(|c| c.ty() == PngChunkTy::IDAT).unwrap();
  assert_eq!(idat.crc(), 0xDEAD_BEEF);
}

#[test]
fn test_parse_stops_at_iend_and_keeps_the_trailer() {
  // chunk-shaped bytes after IEND are trailer, not chunks
  let ghost = chunk_record(b"tEXt", b"ghost", 0);
  let mut bytes = demo_png(&[]);
  bytes.extend_from_slice(&ghost);
  let image = PngImage::parse(&bytes).unwrap();
  assert_eq!(
    tags_of(&image),
    [PngChunkTy::IHDR, PngChunkTy::IDAT, PngChunkTy::IEND]
  );
  assert_eq!(image.trailer(), ghost.as_slice());
  // and the trailer still round-trips
  assert_eq!(image.to_vec(), bytes);
}

#[test]
fn test_set_phys_inserts_before_idat() {
  // 2835 = 0x0B13 pixels per meter, the "72 dpi" density
  let mut image = PngImage::parse(&demo_png(&[])).unwrap();
  image.set_phys_chunk(pHYs { ppu_x: 2835, ppu_y: 2835, unit: 1 }).unwrap();
  assert_eq!(
    tags_of(&image),
    [PngChunkTy::IHDR, PngChunkTy::pHYs, PngChunkTy::IDAT, PngChunkTy::IEND]
  );
  let phys = &image.chunks()[1];
  assert_eq!(phys.length(), 9);
  assert_eq!(phys.payload(), &[0x00, 0x00, 0x0B, 0x13, 0x00, 0x00, 0x0B, 0x13, 0x01]);
  assert_eq!(phys.crc(), 0x009A_9C18);
}

#[test]
fn test_set_phys_twice_leaves_one_chunk() {
  let mut image = PngImage::parse(&demo_png(&[])).unwrap();
  image.set_phys_chunk(pHYs { ppu_x: 3780, ppu_y: 3780, unit: 1 }).unwrap();
  let after_first = image.clone();
  image.set_phys_chunk(pHYs { ppu_x: 3780, ppu_y: 3780, unit: 1 }).unwrap();
  assert_eq!(image, after_first);
  let phys_count =
    image.chunks().iter().filter(|c| c.ty() == PngChunkTy::pHYs).count();
  assert_eq!(phys_count, 1);
}

#[test]
fn test_set_phys_replaces_an_existing_chunk_in_place() {
  let old_phys = chunk_record(b"pHYs", &[0; 9], 0);
  let mut image = PngImage::parse(&demo_png(&[old_phys])).unwrap();
  image.set_phys_chunk(pHYs { ppu_x: 2835, ppu_y: 2835, unit: 1 }).unwrap();
  assert_eq!(
    tags_of(&image),
    [PngChunkTy::IHDR, PngChunkTy::pHYs, PngChunkTy::IDAT, PngChunkTy::IEND]
  );
  let phys = pHYs::try_from(&image.chunks()[1]).unwrap();
  assert_eq!(phys, pHYs { ppu_x: 2835, ppu_y: 2835, unit: 1 });
}

#[test]
fn test_set_phys_keeps_a_misplaced_chunk_where_it_was() {
  // a malformed file with pHYs after IDAT: replace preserves the position
  let mut bytes = Vec::new();
  bytes.extend_from_slice(&PNG_SIGNATURE);
  bytes.extend_from_slice(&chunk_record(b"IHDR", &IHDR_PAYLOAD, IHDR_CRC));
  bytes.extend_from_slice(&chunk_record(b"IDAT", &[9, 9], 0));
  bytes.extend_from_slice(&chunk_record(b"pHYs", &[0; 9], 0));
  bytes.extend_from_slice(&chunk_record(b"IEND", &[], 0xAE42_6082));
  let mut image = PngImage::parse(&bytes).unwrap();
  image.set_phys_chunk(pHYs { ppu_x: 100, ppu_y: 100, unit: 1 }).unwrap();
  assert_eq!(
    tags_of(&image),
    [PngChunkTy::IHDR, PngChunkTy::IDAT, PngChunkTy::pHYs, PngChunkTy::IEND]
  );
  assert_eq!(pHYs::try_from(&image.chunks()[2]).unwrap().ppu_x, 100);
}

#[test]
fn test_set_phys_without_an_anchor_fails_without_changes() {
  let mut bytes = PNG_SIGNATURE.to_vec();
  bytes.extend_from_slice(&chunk_record(b"IHDR", &IHDR_PAYLOAD, IHDR_CRC));
  bytes.extend_from_slice(&chunk_record(b"IEND", &[], 0xAE42_6082));
  let mut image = PngImage::parse(&bytes).unwrap();
  let result = image.set_phys_chunk(pHYs { ppu_x: 2835, ppu_y: 2835, unit: 1 });
  assert_eq!(result, Err(RechunkError::MissingTargetChunk));
  assert_eq!(tags_of(&image), [PngChunkTy::IHDR, PngChunkTy::IEND]);
  assert_eq!(image.to_vec(), bytes);
}

#[test]
fn test_replace_or_insert_before_generalizes() {
  let tEXt = PngChunkTy(*b"tEXt");
  let mut image = PngImage::parse(&demo_png(&[])).unwrap();
  // no tEXt yet: lands ahead of the anchor
  let first = PngChunk::from_ty_and_payload(tEXt, b"Title\0one");
  image.replace_or_insert_before(first, PngChunkTy::IDAT).unwrap();
  assert_eq!(
    tags_of(&image),
    [PngChunkTy::IHDR, tEXt, PngChunkTy::IDAT, PngChunkTy::IEND]
  );
  // a second insert of the same type replaces at the same index
  let second = PngChunk::from_ty_and_payload(tEXt, b"Title\0two");
  image.replace_or_insert_before(second.clone(), PngChunkTy::IDAT).unwrap();
  assert_eq!(
    tags_of(&image),
    [PngChunkTy::IHDR, tEXt, PngChunkTy::IDAT, PngChunkTy::IEND]
  );
  assert_eq!(image.chunks()[1], second);
}

#[test]
fn test_write_into_needs_the_exact_space() {
  let mut image = PngImage::parse(&demo_png(&[])).unwrap();
  image.set_phys_chunk(pHYs { ppu_x: 2835, ppu_y: 2835, unit: 1 }).unwrap();
  let expected = image.to_vec();
  assert_eq!(image.byte_len(), expected.len());
  // a sink one byte short is refused and left untouched
  let mut short = vec![0_u8; expected.len() - 1];
  assert_eq!(image.write_into(&mut short), Err(RechunkError::IncompleteWrite));
  assert!(short.iter().all(|b| *b == 0));
  // an exact sink gets the same bytes as to_vec
  let mut sink = vec![0_u8; expected.len()];
  assert_eq!(image.write_into(&mut sink), Ok(expected.len()));
  assert_eq!(sink, expected);
}

#[test]
fn test_raw_iter_agrees_with_parse_on_clean_input() {
  let bytes = demo_png(&[chunk_record(b"pHYs", &[0, 0, 0x0B, 0x13, 0, 0, 0x0B, 0x13, 1], 0x009A_9C18)]);
  let image = PngImage::parse(&bytes).unwrap();
  let raw: Vec<_> = PngRawChunkIter::new(&bytes).collect();
  assert_eq!(raw.len(), image.chunks().len());
  for (raw_chunk, chunk) in raw.iter().zip(image.chunks()) {
    assert_eq!(raw_chunk.ty(), chunk.ty());
    assert_eq!(raw_chunk.data(), chunk.payload());
    assert_eq!(raw_chunk.declared_crc(), chunk.crc());
  }
  // this file's pHYs really is checksummed correctly
  let raw_phys = raw.iter().find(|c| c.ty() == PngChunkTy::pHYs).unwrap();
  assert_eq!(raw_phys.compute_actual_crc(), raw_phys.declared_crc());
}

#[test]
fn test_nothing_panics_on_arbitrary_bytes() {
  // iter ALL files in the test folder, even non-png files shouldn't panic.
  for entry in WalkDir::new("tests/").into_iter().filter_map(|e| e.ok()) {
    let v = match std::fs::read(entry.path()) {
      Ok(v) => v,
      Err(_) => continue,
    };
    for _ in PngRawChunkIter::new(&v) {
      //
    }
    let _ = PngImage::parse(&v);
  }
  // even totally random data should never panic the parser!
  for _ in 0..10 {
    let v = super::rand_bytes(1024);
    for _ in PngRawChunkIter::new(&v) {
      //
    }
    let _ = PngImage::parse(&v);
  }
}
