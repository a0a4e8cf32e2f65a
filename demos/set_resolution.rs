//! Sets the physical pixel density of a PNG file, leaving everything else
//! in the file untouched.
//!
//! Usage: `set_resolution <input.png> <output.png> <pixels-per-inch>`

use rechunk::png::{pHYs, PngImage};
use std::process::ExitCode;

fn main() -> ExitCode {
  let args: Vec<String> = std::env::args().collect();
  let (input, output, ppi) = match args.as_slice() {
    [_, input, output, ppi] => match ppi.parse::<u32>() {
      Ok(ppi) if ppi > 0 => (input, output, ppi),
      _ => return usage(),
    },
    _ => return usage(),
  };

  let bytes = match std::fs::read(input) {
    Ok(bytes) => bytes,
    Err(e) => {
      eprintln!("{input}: {e}");
      return ExitCode::FAILURE;
    }
  };
  let mut image = match PngImage::parse(&bytes) {
    Ok(image) => image,
    Err(e) => {
      eprintln!("{input}: {e:?}");
      return ExitCode::FAILURE;
    }
  };

  // pixels per inch to pixels per meter, to the nearest whole pixel
  let ppm = ((ppi as f64) / 0.0254).round() as u32;
  if let Err(e) = image.set_phys_chunk(pHYs { ppu_x: ppm, ppu_y: ppm, unit: pHYs::UNIT_METER }) {
    eprintln!("{input}: {e:?}");
    return ExitCode::FAILURE;
  }

  if let Err(e) = std::fs::write(output, image.to_vec()) {
    eprintln!("{output}: {e}");
    return ExitCode::FAILURE;
  }
  ExitCode::SUCCESS
}

fn usage() -> ExitCode {
  eprintln!("Usage: set_resolution <input.png> <output.png> <pixels-per-inch>");
  ExitCode::FAILURE
}
