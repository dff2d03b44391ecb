//! Conversion run orchestration.
//!
//! One run is four stages in order: load config, read rows, run the
//! pipeline, write the document. Each stage's failure aborts the run with
//! the stage named in the error chain; nothing is written on failure.

use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info};

use tabcast_core::{PipelineOptions, run_pipeline};
use tabcast_ingest::{load_schema, read_rows};
use tabcast_output::write_records;

use crate::cli::Cli;
use crate::types::RunResult;

/// Load the schema, convert the input, and write the output document.
pub fn run_convert(cli: &Cli) -> Result<RunResult> {
    let start = Instant::now();

    let schema = load_schema(&cli.config)
        .with_context(|| format!("load config {}", cli.config.display()))?;
    debug!(
        columns = schema.columns.len(),
        has_header = schema.has_header,
        ignore_duplicates = schema.ignore_duplicates,
        "config loaded"
    );

    let rows = read_rows(&cli.input)
        .with_context(|| format!("read input {}", cli.input.display()))?;
    debug!(
        rows = rows.len(),
        duration_ms = start.elapsed().as_millis(),
        "input read"
    );

    let options = PipelineOptions {
        workers: cli.workers,
    };
    let output = run_pipeline(&schema, &rows, &options)
        .with_context(|| format!("convert {}", cli.input.display()))?;

    write_records(&cli.output, &output.records)
        .with_context(|| format!("write output {}", cli.output.display()))?;
    info!(
        records = output.records.len(),
        output = %cli.output.display(),
        duration_ms = start.elapsed().as_millis(),
        "conversion complete"
    );

    Ok(RunResult {
        output_path: cli.output.clone(),
        ignore_duplicates: schema.ignore_duplicates,
        telemetry: output.telemetry,
    })
}
