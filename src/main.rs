use chart_volume_scan::image_pipeline::{ScanConfig, VolumeScanPipeline};
use chart_volume_scan::{logger, runner};

use tracing::info;

fn main() {
    logger::init();

    info!("Starting chart_volume_scan...");

    let pipeline = VolumeScanPipeline::new(ScanConfig::default());

    info!("Input: {}", pipeline.config().input_path.display());
    info!(
        "Bottom offset: {}px, red tolerance: {:#x}, blue tolerance: {:#x}",
        pipeline.config().bottom_offset_px,
        pipeline.config().red.tolerance,
        pipeline.config().blue.tolerance
    );

    let code = runner::report_outcome(runner::run(&pipeline), &mut std::io::stdout().lock());
    std::process::exit(code);
}
