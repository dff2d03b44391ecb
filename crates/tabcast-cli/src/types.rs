use std::path::PathBuf;

use tabcast_core::Telemetry;

/// Outcome of a completed conversion, as reported to the user.
#[derive(Debug)]
pub struct RunResult {
    pub output_path: PathBuf,
    pub ignore_duplicates: bool,
    pub telemetry: Telemetry,
}
