use std::path::PathBuf;

use thiserror::Error;

/// Failure to read an "overs.balls" value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OversError {
    #[error("malformed overs notation: {0:?}")]
    Malformed(String),

    #[error("overs cannot be negative: {0:?}")]
    Negative(String),

    #[error("overs value too large: {0:?}")]
    Overflow(String),
}

/// Failure to load the venue reference table.
#[derive(Error, Debug)]
pub enum ReferenceDataError {
    #[error("failed to read venues file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse venues file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("venue list is empty")]
    Empty,

    #[error("duplicate venue name: {0}")]
    DuplicateVenue(String),

    #[error("venue {0} has a zero average score")]
    ZeroAverage(String),
}
