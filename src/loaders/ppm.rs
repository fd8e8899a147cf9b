//! Binary PPM (P6) terrain source and sink.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::pnm::{PnmEncoder, PnmSubtype, SampleEncoding};
use image::{ExtendedColorType, ImageEncoder, ImageFormat};
use log::debug;

use crate::grid::TerrainGrid;
use crate::types::TerrainError;
use crate::visualization::terrain_to_image;

/// Load and classify a terrain image.
pub fn load_terrain(path: impl AsRef<Path>) -> Result<TerrainGrid, TerrainError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    debug!("read {} bytes from {}", bytes.len(), path.display());
    decode_terrain(&bytes)
}

/// Decode an in-memory PNM image and classify it.
pub fn decode_terrain(bytes: &[u8]) -> Result<TerrainGrid, TerrainError> {
    let image = image::load_from_memory_with_format(bytes, ImageFormat::Pnm)?;
    let rgb = image.to_rgb8();
    let (width, height) = rgb.dimensions();
    TerrainGrid::classify(width, height, rgb.as_raw())
}

/// Render a terrain grid and write it as a binary PPM.
pub fn save_terrain(path: impl AsRef<Path>, grid: &TerrainGrid) -> Result<(), TerrainError> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_terrain(&mut writer, grid)?;
    writer.flush()?;
    debug!("wrote {}x{} terrain to {}", grid.width(), grid.height(), path.display());
    Ok(())
}

/// Encode a terrain grid as a binary PPM into memory.
pub fn encode_terrain(grid: &TerrainGrid) -> Result<Vec<u8>, TerrainError> {
    let mut bytes = Vec::new();
    write_terrain(&mut bytes, grid)?;
    Ok(bytes)
}

fn write_terrain<W: Write>(writer: W, grid: &TerrainGrid) -> Result<(), TerrainError> {
    let image = terrain_to_image(grid);
    PnmEncoder::new(writer)
        .with_subtype(PnmSubtype::Pixmap(SampleEncoding::Binary))
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgb8,
        )?;
    Ok(())
}
