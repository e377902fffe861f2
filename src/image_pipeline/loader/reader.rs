use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::grid::SourceGrid;

pub trait ChartImageReader {
    fn read_image(&self, data: &[u8]) -> Result<SourceGrid>;
}
