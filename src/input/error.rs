// Load-time errors for the two input files.

use std::path::PathBuf;

/// Errors raised while reading the categories table or the keyword records.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid categories table: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid keyword records: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Keyword records must be a JSON array of objects")]
    NotAnArray,

    #[error("Malformed category row at line {line}: {reason}")]
    MalformedCategory { line: u64, reason: String },

    #[error("Malformed keyword record #{index}: {reason}")]
    MalformedRecord { index: usize, reason: String },
}
