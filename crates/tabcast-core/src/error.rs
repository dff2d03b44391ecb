//! Error types for the row pipeline.

use tabcast_model::ColumnType;
use thiserror::Error;

/// A value rejected by a strict-policy column.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot cast {value:?} to {ty} for column {field}")]
pub struct CastError {
    /// Source field name from the schema.
    pub field: String,
    /// Declared type the value failed to satisfy.
    pub ty: ColumnType,
    /// The offending raw value, after default substitution.
    pub value: String,
}

/// Why a run produced no output.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A strict-policy cast failed; the job stopped with nothing written.
    #[error("row {row}: cannot cast {value:?} to {ty} for column {field}")]
    StrictCast {
        row: usize,
        field: String,
        ty: ColumnType,
        value: String,
    },

    /// The worker pool could not be built.
    #[error("failed to build worker pool: {source}")]
    WorkerPool {
        #[source]
        source: rayon::ThreadPoolBuildError,
    },
}

impl PipelineError {
    /// Attach the failing row's index to a cast error.
    pub(crate) fn strict_cast(row: usize, error: CastError) -> Self {
        Self::StrictCast {
            row,
            field: error.field,
            ty: error.ty,
            value: error.value,
        }
    }
}
