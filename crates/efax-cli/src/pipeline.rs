//! End-to-end cleaning run: load, clean, serialize, write.

use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use efax_ingest::read_analysis_csv;
use efax_model::{CleanOptions, CleanReport};
use efax_output::{frame_to_records, write_json};
use efax_transform::clean_frame;

/// Runs the cleaner against `options` and reports what it did.
///
/// Nothing is written unless every stage before the write succeeds.
pub fn run_clean(options: &CleanOptions) -> Result<CleanReport> {
    let span = info_span!("clean", input = %options.input_path.display());
    let _guard = span.enter();

    let ingest_start = Instant::now();
    let (mut df, headers) = read_analysis_csv(&options.input_path)
        .with_context(|| format!("load {}", options.input_path.display()))?;
    info!(
        rows = df.height(),
        columns = headers.len(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    let counts = clean_frame(&mut df).context("clean records")?;

    let output_start = Instant::now();
    let records = frame_to_records(&df).context("build records")?;
    write_json(&options.output_path, &records)
        .with_context(|| format!("write {}", options.output_path.display()))?;
    info!(
        records = records.len(),
        output = %options.output_path.display(),
        duration_ms = output_start.elapsed().as_millis(),
        "output written"
    );

    Ok(CleanReport {
        output_path: options.output_path.clone(),
        records: records.len(),
        counts,
    })
}
