use std::io::Write;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::grid::FilterGrid;

pub trait FilterWriter {
    fn write_png(&self, grid: &FilterGrid, output: &mut dyn Write) -> Result<()>;
}
