//! PNG export and import of pixel grids.

use std::path::Path;
use rgb::RGBA8;
use thiserror::Error;
use crate::{graphics::Buffer, headless::Frame, pixel::Pixel};

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("png: {0}")]
    Png(#[from] lodepng::Error),
    #[error("cannot save an empty {width}x{height} image")]
    Empty { width: u32, height: u32 },
}

pub fn save_png<P: AsRef<Path>>(buffer: &Buffer, path: P) -> Result<(), SnapshotError> {
    save_pixels(buffer.pixels(), buffer.width(), buffer.height(), path)
}

pub fn save_frame<P: AsRef<Path>>(frame: &Frame, path: P) -> Result<(), SnapshotError> {
    save_pixels(&frame.pixels, frame.width, frame.height, path)
}

fn save_pixels<P: AsRef<Path>>(
    pixels: &[Pixel],
    width: u32,
    height: u32,
    path: P,
) -> Result<(), SnapshotError> {
    if pixels.is_empty() {
        return Err(SnapshotError::Empty { width, height });
    }
    let rgba: Vec<RGBA8> = pixels.iter().map(|&p| p.into()).collect();
    lodepng::encode32_file(path.as_ref(), &rgba, width as usize, height as usize)?;
    log::debug!("saved {}x{} snapshot to {}", width, height, path.as_ref().display());
    Ok(())
}

/// Loads a PNG into a new buffer of the image's size.
pub fn load_png<P: AsRef<Path>>(path: P) -> Result<Buffer, SnapshotError> {
    let image = lodepng::decode32_file(path)?;
    let mut buffer = Buffer::new(image.width as u32, image.height as u32);
    for (dst, &src) in buffer.pixels_mut().iter_mut().zip(image.buffer.iter()) {
        *dst = src.into();
    }
    Ok(buffer)
}
