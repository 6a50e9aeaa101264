//! Error Types
//!
//! Failures of the catalog client and of the favorites storage backend.

use thiserror::Error;

/// A catalog request that did not produce a usable body
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The service answered with a non-success status
    #[error("HTTP error! status: {0}")]
    Status(u16),
    /// The request never completed (network down, CORS, aborted)
    #[error("Transport error: {0}")]
    Transport(String),
    /// The body was not the JSON we expected
    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else {
            FetchError::Transport(err.to_string())
        }
    }
}

pub type FetchResult<T> = Result<T, FetchError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("failed to read storage: {0}")]
    Read(String),
    /// Quota exceeded or the browser refused the write
    #[error("failed to write storage: {0}")]
    Write(String),
    #[error("failed to encode favorites: {0}")]
    Serialize(String),
}

pub type StorageResult<T> = Result<T, StorageError>;
