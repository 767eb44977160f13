use std::num::ParseFloatError;

use crate::core::window::OffPeakWindow;

/// Failures of a single comparison run.
///
/// Everything except [`PipelineError::DegenerateWindow`] aborts the run.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("please select a CSV file (got {0} files)")]
    FileSelection(usize),

    #[error("invalid file contents: unexpected header `{found}`")]
    Schema { found: String },

    /// Not a number, or not a finite one.
    #[error("line {line}: invalid consumption `{value}`")]
    Consumption {
        line: u64,
        value: String,

        #[source]
        source: Option<ParseFloatError>,
    },

    #[error("line {line}: invalid timestamp `{value}`")]
    Timestamp {
        line: u64,
        value: String,

        #[source]
        source: chrono::ParseError,
    },

    #[error("the export contains no complete consumption rows")]
    NoData,

    #[error("the off-peak window {0} has zero duration")]
    DegenerateWindow(OffPeakWindow),
}
