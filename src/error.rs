// src/error.rs

use std::path::PathBuf;

/// Errors produced while loading measurements and fitting them.
#[derive(Debug, thiserror::Error)]
pub enum LabError {
    /// The input file could not be read
    #[error("cannot read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input file is not valid JSON, or a field has the wrong shape
    #[error("malformed measurement file: {0}")]
    Json(#[from] serde_json::Error),

    /// A named measurement set is absent from the input file
    #[error("measurement set '{0}' not found in input file")]
    MissingKey(String),

    /// Two arrays that must pair up element-wise differ in length
    #[error("length mismatch: {left} has {left_len} values, {right} has {right_len}")]
    LengthMismatch {
        left: &'static str,
        left_len: usize,
        right: &'static str,
        right_len: usize,
    },

    /// Not enough values for the requested statistic
    #[error("insufficient data: {what} needs at least {needed} values, got {got}")]
    InsufficientData {
        what: &'static str,
        needed: usize,
        got: usize,
    },

    /// Every abscissa is identical so no line can be fitted
    #[error("degenerate fit: all x values are equal")]
    DegenerateFit,

    /// A derived constant would require dividing by zero
    #[error("cannot derive {0}: division by zero")]
    ZeroDivisor(&'static str),

    /// Writing the exported point table failed
    #[error("csv export failed: {0}")]
    Csv(#[from] csv::Error),
}

pub type LabResult<T> = Result<T, LabError>;

// src/error.rs
