//! Binary entry points kept in the library so the exit contract is testable.
//!
//! The report or the error goes to the given sink (stdout in the binary);
//! the returned code is the process exit status.

use std::io::Write;
use anyhow::Context;
use tracing::error;

use crate::image_pipeline::{ChartImageReader, FilterWriter, ScanReport, VolumeScanPipeline};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

pub fn run<R: ChartImageReader, W: FilterWriter>(
    pipeline: &VolumeScanPipeline<R, W>,
) -> anyhow::Result<ScanReport> {
    let input = pipeline.config().input_path.display().to_string();
    pipeline
        .run()
        .with_context(|| format!("Volume scan of {input} failed"))
}

pub fn report_outcome(outcome: anyhow::Result<ScanReport>, out: &mut dyn Write) -> i32 {
    let written = match &outcome {
        Ok(report) => write!(out, "{report}"),
        Err(e) => {
            error!("Scan failed: {:#}", e);
            writeln!(out, "{:#}", e)
        }
    }
    .and_then(|_| out.flush());

    match (outcome, written) {
        (Ok(_), Ok(())) => EXIT_SUCCESS,
        _ => EXIT_FAILURE,
    }
}
