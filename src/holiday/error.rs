//! Error types for bank-holiday sources

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while fetching, caching, importing or exporting bank holidays
#[derive(Error, Debug)]
pub enum HolidayError {
    /// HTTP request error
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server error with status code
    #[error("Server error: {0}")]
    ServerError(u16),

    /// Request timeout
    #[error("Request timed out while fetching bank holidays for {year}")]
    Timeout { year: i32 },

    /// Maximum retry attempts exceeded
    #[error("Maximum retry attempts exceeded")]
    MaxRetriesExceeded,

    /// Response body could not be decoded
    #[error("Decoding error: {0}")]
    Decode(String),

    /// Year missing from the cache
    #[error("Could not find bank holidays in cache for year {0}")]
    CacheMiss(i32),

    /// A line of a holiday file is malformed
    #[error("Invalid bank holiday line {line}: '{content}'")]
    InvalidLine { line: usize, content: String },

    /// Refused to overwrite an existing file
    #[error("The file {} already exists", .0.display())]
    FileExists(PathBuf),

    /// Manual entry rejected
    #[error("Invalid bank holiday entry: {0}")]
    InvalidEntry(String),

    /// Network is known to be unavailable
    #[error("No internet connection available")]
    Offline,

    /// File system error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl HolidayError {
    /// Check if the error is worth retrying
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Http(_) | Self::Timeout { .. } | Self::MaxRetriesExceeded | Self::Offline => true,
            Self::ServerError(code) => matches!(code, 429 | 500 | 502 | 503 | 504),
            _ => false,
        }
    }

    /// True for failures reaching the remote API
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            Self::Http(_)
                | Self::ServerError(_)
                | Self::Timeout { .. }
                | Self::MaxRetriesExceeded
                | Self::Offline
        )
    }
}
