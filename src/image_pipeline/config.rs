//! Scan configuration types

use std::path::PathBuf;
use image::Rgba;
use crate::image_pipeline::color::ColorTarget;
use crate::image_pipeline::volume::VolumeModel;

/// Reference color of falling (red) volume bars
pub const RED_REFERENCE: ColorTarget = ColorTarget::new(Rgba([0xf1, 0x75, 0x72, 0xff]), 0x3c00);

/// Reference color of rising (blue) volume bars
pub const BLUE_REFERENCE: ColorTarget = ColorTarget::new(Rgba([0x00, 0xc0, 0xc5, 0xff]), 0x4000);

/// Rows at the bottom of the chart treated as axis and never scanned
pub const DEFAULT_BOTTOM_OFFSET_PX: u32 = 1;

/// Destinations of the four classification filters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub red: PathBuf,
    pub not_red: PathBuf,
    pub red_blue: PathBuf,
    pub not_red_blue: PathBuf,
}

impl Default for OutputPaths {
    fn default() -> Self {
        Self {
            red: PathBuf::from("./red.png"),
            not_red: PathBuf::from("./notRed.png"),
            red_blue: PathBuf::from("./redBlue.png"),
            not_red_blue: PathBuf::from("./notRedBlue.png"),
        }
    }
}

impl OutputPaths {
    /// All four paths, named, in the order they are written.
    pub fn named(&self) -> [(&'static str, &PathBuf); 4] {
        [
            ("red", &self.red),
            ("not_red", &self.not_red),
            ("red_blue", &self.red_blue),
            ("not_red_blue", &self.not_red_blue),
        ]
    }
}

/// Configuration for a chart volume scan
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Chart image to read
    pub input_path: PathBuf,
    /// Where the filters are written
    pub outputs: OutputPaths,
    /// Red bar color and tolerance
    pub red: ColorTarget,
    /// Blue bar color and tolerance
    pub blue: ColorTarget,
    /// Rows excluded at the bottom of the image
    pub bottom_offset_px: u32,
    /// Pixel to volume scaling
    pub volume: VolumeModel,
    /// Whether to reject empty images before scanning
    pub validate_dimensions: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("./test2.png"),
            outputs: OutputPaths::default(),
            red: RED_REFERENCE,
            blue: BLUE_REFERENCE,
            bottom_offset_px: DEFAULT_BOTTOM_OFFSET_PX,
            volume: VolumeModel::default(),
            validate_dimensions: true,
        }
    }
}

impl ScanConfig {
    pub fn builder() -> ScanConfigBuilder {
        ScanConfigBuilder::default()
    }
}

/// Builder for ScanConfig
#[derive(Default)]
pub struct ScanConfigBuilder {
    input_path: Option<PathBuf>,
    outputs: Option<OutputPaths>,
    red: Option<ColorTarget>,
    blue: Option<ColorTarget>,
    bottom_offset_px: Option<u32>,
    volume: Option<VolumeModel>,
    validate_dimensions: Option<bool>,
}

impl ScanConfigBuilder {
    pub fn input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = Some(path.into());
        self
    }

    pub fn outputs(mut self, outputs: OutputPaths) -> Self {
        self.outputs = Some(outputs);
        self
    }

    pub fn red(mut self, red: ColorTarget) -> Self {
        self.red = Some(red);
        self
    }

    pub fn blue(mut self, blue: ColorTarget) -> Self {
        self.blue = Some(blue);
        self
    }

    pub fn bottom_offset_px(mut self, offset: u32) -> Self {
        self.bottom_offset_px = Some(offset);
        self
    }

    pub fn volume(mut self, volume: VolumeModel) -> Self {
        self.volume = Some(volume);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn build(self) -> ScanConfig {
        let default = ScanConfig::default();
        ScanConfig {
            input_path: self.input_path.unwrap_or(default.input_path),
            outputs: self.outputs.unwrap_or(default.outputs),
            red: self.red.unwrap_or(default.red),
            blue: self.blue.unwrap_or(default.blue),
            bottom_offset_px: self.bottom_offset_px.unwrap_or(default.bottom_offset_px),
            volume: self.volume.unwrap_or(default.volume),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
        }
    }
}
