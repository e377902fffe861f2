//! PNG writing module
//!
//! This module encodes classification filters as 8-bit RGBA PNG files.

mod writer;
mod standard_png_writer;

pub use writer::FilterWriter;
pub use standard_png_writer::StandardPngWriter;
