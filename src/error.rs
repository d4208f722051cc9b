//! Typed failures surfaced by the library.
//!
//! Only I/O-adjacent conditions are errors. A missing or mismatched trailer
//! is a normal classification outcome and never appears here.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TailsigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is {size} bytes, above the configured limit of {limit}")]
    FileTooLarge { path: PathBuf, size: u64, limit: u64 },

    #[error("refusing to overwrite input file {path} in place")]
    InPlaceRefused { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, TailsigError>;
