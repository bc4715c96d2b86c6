//! Errors raised at the data boundary (files, network, record validation).
//!
//! The aggregation core never fails; everything here comes from loading or
//! persisting data around it.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} returned HTTP {status}")]
    Status { status: u16, url: String },

    #[error("invalid record '{name}': {reason}")]
    InvalidRecord { name: String, reason: String },
}

impl DataError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether retrying the operation could succeed.
    ///
    /// Network failures and server errors are transient; client errors,
    /// bad JSON and invalid records are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            DataError::Http(err) => err
                .status()
                .map(|status| status.is_server_error())
                .unwrap_or(true),
            DataError::Status { status, .. } => *status >= 500,
            _ => false,
        }
    }
}
