use std::path::PathBuf;

use thiserror::Error;

/// Failures at the loader boundary.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IngestError {
    /// The request could not be sent or the body could not be read.
    #[error("fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("fetch {url}: HTTP {status}")]
    Status { url: String, status: u16 },

    /// Reading a local CSV file failed (including invalid UTF-8).
    #[error("read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV text is malformed.
    #[error("parse csv: {0}")]
    Parse(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, IngestError>;
