use std::io::Write;
use image::{ExtendedColorType, ImageEncoder};
use image::codecs::png::PngEncoder;
use tracing::debug;
use crate::image_pipeline::common::error::{Result, ScanError};
use crate::image_pipeline::grid::FilterGrid;
use crate::image_pipeline::png::writer::FilterWriter;

pub struct StandardPngWriter;

impl FilterWriter for StandardPngWriter {
    fn write_png(&self, grid: &FilterGrid, output: &mut dyn Write) -> Result<()> {
        debug!("Encoding PNG image: {}x{}", grid.width(), grid.height());

        let mut buffer = Vec::new();

        PngEncoder::new(&mut buffer)
            .write_image(
                grid.buffer().as_raw(),
                grid.width(),
                grid.height(),
                ExtendedColorType::Rgba8,
            )
            .map_err(|e| ScanError::EncodeError(e.to_string()))?;

        output.write_all(&buffer)?;

        debug!("PNG encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_pipeline::grid::{Bounds, FilterGrid};
    use crate::image_pipeline::loader::{ChartImageReader, ImageCrateReader};
    use crate::image_pipeline::color::ToWide;
    use image::Rgba;

    #[test]
    fn test_round_trip_preserves_pixels() {
        let mut grid = FilterGrid::new(Bounds::from_size(4, 3));
        grid.set(0, 0, Rgba([0xf1, 0x75, 0x72, 0xff]));
        grid.set(3, 2, Rgba([0x00, 0xc0, 0xc5, 0xff]));
        grid.set(1, 1, Rgba([0x12, 0x34, 0x56, 0xff]));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("round_trip.png");
        let mut file = std::fs::File::create(&path).unwrap();
        StandardPngWriter.write_png(&grid, &mut file).unwrap();
        drop(file);

        let bytes = std::fs::read(&path).unwrap();
        let decoded = ImageCrateReader.read_image(&bytes).unwrap();

        assert_eq!(decoded.bounds(), grid.bounds());
        for (x, y, pixel) in grid.buffer().enumerate_pixels() {
            let read_back = decoded.get(x as i32, y as i32).unwrap();
            assert_eq!(&read_back.to_rgba8(), pixel, "pixel ({x}, {y})");
        }
    }

    #[test]
    fn test_failing_sink_is_io_error() {
        struct BrokenSink;

        impl Write for BrokenSink {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("sink closed"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let grid = FilterGrid::new(Bounds::from_size(2, 2));
        let result = StandardPngWriter.write_png(&grid, &mut BrokenSink);
        assert!(matches!(result, Err(ScanError::IoError(_))));
    }
}
