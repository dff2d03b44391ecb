//! Row transformation pipeline.
//!
//! Raw string rows fan out across a bounded worker pool; each row is keyed
//! for duplicate suppression, cast column by column against the schema,
//! and collected into labeled records together with run telemetry.
//!
//! The stages, leaf-first:
//! 1. **Cast** ([`cast_value`]): raw string to typed value under the
//!    column's policy.
//! 2. **Key** ([`row_key`]): composite duplicate-detection key.
//! 3. **Track** ([`DuplicateTracker`]): shared test-and-insert seen set.
//! 4. **Process** ([`process_row`]): one row to one [`RowOutcome`].
//! 5. **Run** ([`run_pipeline`]): parallel dispatch, aggregation,
//!    [`Telemetry`].

mod cast;
mod dedupe;
mod error;
mod key;
mod pipeline;
mod processor;
mod telemetry;

pub use cast::cast_value;
pub use dedupe::DuplicateTracker;
pub use error::{CastError, PipelineError};
pub use key::row_key;
pub use pipeline::{PipelineOptions, PipelineOutput, run_pipeline};
pub use processor::{RowOutcome, process_row};
pub use telemetry::Telemetry;
