use std::path::PathBuf;

use thiserror::Error;

/// Errors from generating, writing, or reading order files
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("I/O error on {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid {field} range: [{min}, {max}]")]
    InvalidRange {
        field: &'static str,
        min: u64,
        max: u64,
    },

    #[error("malformed order line: {0}")]
    ParseOrder(#[from] csv::Error),

    #[error("malformed order line: expected 4 fields, got {0}")]
    FieldCount(usize),
}

pub type GeneratorResult<T> = Result<T, GeneratorError>;
