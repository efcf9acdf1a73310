//! Error type shared by table construction, sample statistics and report I/O.
//!
//! The reductions themselves (`mode`, `all_modes`, `pmf_mean`, `pmf_var`) never fail;
//! everything that can reject its input returns [`Result`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("total frequency is zero, cannot normalize an empty table")]
    ZeroTotal,
    #[error("invalid probability {prob} for value {value}")]
    InvalidProbability { value: String, prob: f64 },
    #[error("sample needs at least 2 values, got {len}")]
    EmptySample { len: usize },
    #[error("pooled variance is zero")]
    ZeroVariance,
    #[error("count for value {value} overflows")]
    CountOverflow { value: String },
    #[error("total count overflows")]
    TotalOverflow,
    #[error("table key `{0}` is not an integer")]
    InvalidKey(String),
    #[error("{what}: expected {expected}, got {actual}")]
    Verification {
        what: String,
        expected: String,
        actual: String,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StatsError>;
