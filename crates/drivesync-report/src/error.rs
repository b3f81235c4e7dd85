use std::path::PathBuf;

use thiserror::Error;

/// Validation failures raised while assembling the figure model.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("panel {panel}: {labels} labels but {values} values")]
    LengthMismatch {
        panel: String,
        labels: usize,
        values: usize,
    },

    #[error("event '{event}' overwrites samples {start}..{end} but the signal has {len} samples")]
    SpikeOutOfRange {
        event: String,
        start: usize,
        end: usize,
        len: usize,
    },

    #[error("invalid noise distribution: {0}")]
    InvalidDistribution(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to load font {path}: {reason}")]
    FontLoad { path: PathBuf, reason: String },
}
