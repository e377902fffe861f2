//! Chart image reader backed by the `image` crate.

use image::GenericImageView;
use tracing::debug;
use crate::image_pipeline::common::error::{Result, ScanError};
use crate::image_pipeline::grid::{PixelGrid, SourceGrid};
use crate::image_pipeline::loader::reader::ChartImageReader;

/// Reader that guesses the format from the data and widens every channel to
/// 16 bits, so 8-bit sources land on the same `v * 0x101` scale the color
/// tests use.
pub struct ImageCrateReader;

impl ChartImageReader for ImageCrateReader {
    fn read_image(&self, data: &[u8]) -> Result<SourceGrid> {
        debug!("Decoding chart image, {} bytes", data.len());

        let decoded = image::load_from_memory(data)
            .map_err(|e| ScanError::DecodeError(e.to_string()))?;

        let (width, height) = decoded.dimensions();
        debug!("Decoded image: {}x{} ({:?})", width, height, decoded.color());

        Ok(PixelGrid::from_buffer(decoded.into_rgba16()))
    }
}
