//! Parallel row pipeline.
//!
//! Rows fan out across a bounded worker pool. Workers share exactly two
//! pieces of mutable state, each behind its own lock: the seen-key set
//! inside [`DuplicateTracker`] and the accepted-record collection. No
//! worker ever holds both. A strict cast failure raises a cancellation
//! flag; in-flight rows drain without doing further work and the run
//! reports a single error instead of partial output.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info};

use tabcast_model::{RawRow, Record, Schema};

use crate::dedupe::DuplicateTracker;
use crate::error::PipelineError;
use crate::processor::{RowOutcome, process_row};
use crate::telemetry::Telemetry;

/// Tunables for one run.
#[derive(Debug, Clone, Default)]
pub struct PipelineOptions {
    /// Worker-pool size; defaults to the machine's logical CPU count.
    pub workers: Option<usize>,
}

/// Everything a completed run produces.
#[derive(Debug)]
pub struct PipelineOutput {
    /// Accepted records, sorted back into input-row order.
    pub records: Vec<Record>,
    pub telemetry: Telemetry,
}

/// Run the conversion over `rows`.
///
/// The first row is dropped here when the schema declares a header; the
/// row source hands over every physical row. The call blocks until every
/// dispatched row has finished.
pub fn run_pipeline(
    schema: &Schema,
    rows: &[RawRow],
    options: &PipelineOptions,
) -> Result<PipelineOutput, PipelineError> {
    let workers = options.workers.unwrap_or_else(num_cpus::get).max(1);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .map_err(|source| PipelineError::WorkerPool { source })?;

    let data_rows = if schema.has_header && !rows.is_empty() {
        &rows[1..]
    } else {
        rows
    };
    let total_rows = data_rows.len();
    debug!(total_rows, workers, "dispatching rows");

    let tracker = DuplicateTracker::new();
    let accepted: Mutex<Vec<(usize, Record)>> = Mutex::new(Vec::with_capacity(total_rows));
    let ignored = AtomicUsize::new(0);
    let cancelled = AtomicBool::new(false);
    let failure: Mutex<Option<PipelineError>> = Mutex::new(None);

    let started = Instant::now();
    pool.install(|| {
        data_rows.par_iter().enumerate().for_each(|(index, row)| {
            if cancelled.load(Ordering::Acquire) {
                return;
            }
            match process_row(index, row, schema, &tracker) {
                Ok(RowOutcome::Accepted(record)) => {
                    let mut records = accepted.lock().expect("record lock poisoned");
                    records.push((index, record));
                }
                Ok(RowOutcome::Skipped) => {
                    ignored.fetch_add(1, Ordering::Relaxed);
                }
                Err(error) => {
                    cancelled.store(true, Ordering::Release);
                    let mut slot = failure.lock().expect("failure lock poisoned");
                    slot.get_or_insert(PipelineError::strict_cast(index, error));
                }
            }
        });
    });
    let elapsed = started.elapsed();

    if let Some(error) = failure.into_inner().expect("failure lock poisoned") {
        return Err(error);
    }

    let mut indexed = accepted.into_inner().expect("record lock poisoned");
    indexed.sort_unstable_by_key(|(index, _)| *index);
    let records: Vec<Record> = indexed.into_iter().map(|(_, record)| record).collect();

    let telemetry = Telemetry {
        total_rows,
        processed_rows: records.len(),
        ignored_rows: ignored.load(Ordering::Relaxed),
        elapsed,
    };
    info!(
        total_rows = telemetry.total_rows,
        processed_rows = telemetry.processed_rows,
        ignored_rows = telemetry.ignored_rows,
        duration_ms = elapsed.as_millis(),
        "pipeline complete"
    );

    Ok(PipelineOutput { records, telemetry })
}
