use image::RgbaImage;
use std::io;
use std::path::Path;

/// Pixel sizes cycled through by [`write_symbol_images`]: square, wide, tall.
const SIZES: [(u32, u32); 4] = [(64, 64), (120, 60), (40, 90), (100, 75)];

pub fn write_symbol_image(dir: &Path, id: usize, width: u32, height: u32) -> io::Result<()> {
    RgbaImage::new(width, height)
        .save(dir.join(format!("{id}.png")))
        .map_err(io::Error::other)
}

/// Writes `1.png ..= count.png`.
pub fn write_symbol_images(dir: &Path, count: usize) -> io::Result<()> {
    for id in 1..=count {
        let (width, height) = SIZES[id % SIZES.len()];
        write_symbol_image(dir, id, width, height)?;
    }
    Ok(())
}
