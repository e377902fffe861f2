use std::fmt;
use std::path::Path;
use tracing::{info, instrument};

use crate::image_pipeline::{
    common::error::{Result, ScanError},
    config::{OutputPaths, ScanConfig},
    count::count_by_color,
    grid::{FilterGrid, SourceGrid},
    loader::{ChartImageReader, ImageCrateReader},
    png::{FilterWriter, StandardPngWriter},
    scan::{FilterSet, classify_columns},
    volume::VolumeEstimate,
};

/// Pixel counts and volume estimate for one chart image.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanReport {
    pub width: u32,
    pub height: u32,
    /// Red reference pixels in the red filter
    pub red_pixels: usize,
    /// Blue reference pixels in the red/blue filter
    pub blue_pixels: usize,
    /// Pixels above the excluded bottom rows
    pub total_pixels: u64,
    pub estimate: VolumeEstimate,
}

impl fmt::Display for ScanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.width, self.height)?;
        writeln!(f, "{} / {}", self.red_pixels, self.total_pixels)?;
        writeln!(f, "Total volume red {} M", self.estimate.red_millions())?;
        writeln!(f, "Total volume blue {} M", self.estimate.blue_millions())
    }
}

/// Result of scanning in memory, before anything is written.
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    pub filters: FilterSet,
    pub report: ScanReport,
}

pub struct VolumeScanPipeline<R: ChartImageReader, W: FilterWriter> {
    reader: R,
    writer: W,
    config: ScanConfig,
}

impl VolumeScanPipeline<ImageCrateReader, StandardPngWriter> {
    pub fn new(config: ScanConfig) -> Self {
        Self {
            reader: ImageCrateReader,
            writer: StandardPngWriter,
            config,
        }
    }
}

impl<R: ChartImageReader, W: FilterWriter> VolumeScanPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: ScanConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    fn validate_dimensions(&self, width: u32, height: u32) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(ScanError::InvalidDimensions(width, height));
        }

        Ok(())
    }

    /// Decodes, classifies and counts `input_data` without touching disk.
    #[instrument(skip(self, input_data), fields(input_size = input_data.len()))]
    pub fn scan(&self, input_data: &[u8]) -> Result<ScanOutcome> {
        let source = {
            let _span = tracing::info_span!("decode_image").entered();
            self.reader.read_image(input_data)?
        };

        {
            let _span = tracing::info_span!("validate_dimensions",
                width = source.width(),
                height = source.height()
            ).entered();
            self.validate_dimensions(source.width(), source.height())?;
        }

        Ok(self.scan_grid(&source))
    }

    pub fn scan_grid(&self, source: &SourceGrid) -> ScanOutcome {
        let filters = {
            let _span = tracing::info_span!("classify_columns").entered();
            classify_columns(
                source,
                &self.config.red,
                &self.config.blue,
                self.config.bottom_offset_px,
            )
        };

        let (red_pixels, blue_pixels) = {
            let _span = tracing::info_span!("count_pixels").entered();
            (
                count_by_color(&filters.red, &self.config.red.color),
                count_by_color(&filters.red_blue, &self.config.blue.color),
            )
        };

        let width = source.width();
        let height = source.height();
        let scanned_rows = height.saturating_sub(self.config.bottom_offset_px);

        let report = ScanReport {
            width,
            height,
            red_pixels,
            blue_pixels,
            total_pixels: width as u64 * scanned_rows as u64,
            estimate: self.config.volume.estimate(width, height, red_pixels, blue_pixels),
        };

        info!(
            width,
            height,
            red_pixels,
            blue_pixels,
            "Classification complete"
        );

        ScanOutcome { filters, report }
    }

    /// Writes the filters in order; a failure leaves earlier files in place.
    pub fn write_filters(&self, filters: &FilterSet, outputs: &OutputPaths) -> Result<()> {
        let grids: [&FilterGrid; 4] = [
            &filters.red,
            &filters.not_red,
            &filters.red_blue,
            &filters.not_red_blue,
        ];

        for ((name, path), grid) in outputs.named().into_iter().zip(grids) {
            let _span = tracing::info_span!("encode_png", filter = name).entered();
            self.write_filter(grid, path)?;
        }

        Ok(())
    }

    fn write_filter(&self, grid: &FilterGrid, path: &Path) -> Result<()> {
        let mut output_file = std::fs::File::create(path).map_err(|e| {
            ScanError::OutputWriteError(format!("{}: {}", path.display(), e))
        })?;

        self.writer.write_png(grid, &mut output_file)?;

        info!(output = %path.display(), "Filter written");
        Ok(())
    }

    /// Scans the configured input file and writes all four filters.
    #[instrument(skip(self))]
    pub fn run(&self) -> Result<ScanReport> {
        let input_path = self.config.input_path.as_path();

        info!(input = %input_path.display(), "Scanning chart image");

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                ScanError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        let outcome = self.scan(&input_data)?;
        self.write_filters(&outcome.filters, &self.config.outputs)?;

        Ok(outcome.report)
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }
}
