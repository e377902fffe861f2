//! Chart image loading module
//!
//! Decodes an encoded image (PNG or any other enabled `image` format) into a
//! 16-bit RGBA [`SourceGrid`](crate::image_pipeline::grid::SourceGrid).

mod reader;
mod image_crate_reader;

pub use reader::ChartImageReader;
pub use image_crate_reader::ImageCrateReader;
