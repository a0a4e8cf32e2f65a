use rechunk::png::{pHYs, PngRawChunkIter};

fn main() {
  let args: Vec<String> = std::env::args().collect();
  for file_arg in args[1..].iter() {
    let path = std::path::Path::new(file_arg);
    print!("Reading `{}`... ", path.display());
    let bytes = match std::fs::read(path) {
      Ok(bytes) => {
        println!("got {} bytes.", bytes.len());
        bytes
      }
      Err(e) => {
        println!("{e:?}");
        continue;
      }
    };
    for (n, chunk) in PngRawChunkIter::new(&bytes).enumerate() {
      let kind = if chunk.ty().is_ancillary() { "ancillary" } else { "critical" };
      let crc_note =
        if chunk.compute_actual_crc() == chunk.declared_crc() { "ok" } else { "MISMATCH" };
      println!(
        "{n}: {} ({kind}), {} payload bytes, crc {crc_note}",
        chunk.ty(),
        chunk.data().len()
      );
      if let Ok(phys) = pHYs::try_from(chunk) {
        println!("   {phys:?}");
      }
    }
  }
}
