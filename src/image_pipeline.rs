//! Chart volume scanning pipeline
//!
//! This module reads a volume chart image, classifies its bars by color into
//! four filter images, and turns the classified pixel counts into a traded
//! volume estimate.

pub mod common;
pub mod grid;
pub mod color;
pub mod loader;
pub mod png;
pub mod scan;
pub mod count;
pub mod volume;
pub mod config;
mod pipeline;


pub use common::{
    ScanError,
    Result,
};

pub use grid::{
    Bounds,
    PixelGrid,
    SourceGrid,
    FilterGrid,
};

pub use color::{
    ColorTarget,
    ToWide,
    WideColor,
    is_close,
};

pub use loader::{
    ChartImageReader,
    ImageCrateReader,
};

pub use png::{
    FilterWriter,
    StandardPngWriter,
};

pub use scan::{FilterSet, classify_columns};
pub use count::count_by_color;
pub use volume::{VolumeEstimate, VolumeModel};

pub use config::{
    OutputPaths,
    ScanConfig,
    ScanConfigBuilder,
};

pub use pipeline::{
    ScanOutcome,
    ScanReport,
    VolumeScanPipeline,
};
