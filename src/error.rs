//! Unified error handling for the ddsm-diaries crate
//!
//! Each module keeps its own error type ([`DiaryError`], [`HolidayError`]).
//! [`Error`] wraps them so the CLI can deal with a single type, and
//! [`DiariesErrorTrait`] gives every error a category and a retry hint.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ddsm_diaries::error::{DiariesErrorTrait, Error};
//!
//! fn report(err: &Error) {
//!     if err.is_recoverable() {
//!         eprintln!("{} (try again later)", err);
//!     } else {
//!         eprintln!("{}: {}", err.category(), err);
//!     }
//! }
//! ```

use std::fmt;
use std::io;
use thiserror::Error;

pub use crate::diary::error::DiaryError;
pub use crate::holiday::error::HolidayError;

/// Common trait for ddsm-diaries error types
pub trait DiariesErrorTrait: std::error::Error {
    /// Check if this error is recoverable (can be retried)
    fn is_recoverable(&self) -> bool;

    /// Get the error category for handling strategies
    fn category(&self) -> ErrorCategory;
}

/// Classification of errors for handling strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Network-related errors (HTTP, timeout, offline)
    Network,
    /// Rejected user input
    Validation,
    /// File and I/O errors
    Storage,
    /// Configuration errors
    Config,
    /// Other/unknown errors
    Other,
}

impl ErrorCategory {
    pub fn description(&self) -> &'static str {
        match self {
            Self::Network => "Network error",
            Self::Validation => "Invalid input",
            Self::Storage => "File error",
            Self::Config => "Configuration error",
            Self::Other => "Error",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Unified error type for the ddsm-diaries crate
#[derive(Error, Debug)]
pub enum Error {
    /// Schedule generation errors
    #[error(transparent)]
    Diary(#[from] DiaryError),

    /// Bank holiday lookup, file and network errors
    #[error(transparent)]
    Holiday(#[from] HolidayError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// Generic error with context
    #[error("{context}")]
    Other {
        context: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl DiariesErrorTrait for Error {
    fn is_recoverable(&self) -> bool {
        match self {
            Self::Diary(e) => e.is_recoverable(),
            Self::Holiday(e) => e.is_recoverable(),
            Self::Io(_) => true,
            Self::Json(_) | Self::Config(_) | Self::Other { .. } => false,
        }
    }

    fn category(&self) -> ErrorCategory {
        match self {
            Self::Diary(_) => ErrorCategory::Validation,
            Self::Holiday(e) => holiday_category(e),
            Self::Io(_) => ErrorCategory::Storage,
            Self::Json(_) => ErrorCategory::Other,
            Self::Config(_) => ErrorCategory::Config,
            Self::Other { .. } => ErrorCategory::Other,
        }
    }
}

impl DiariesErrorTrait for DiaryError {
    fn is_recoverable(&self) -> bool {
        DiaryError::is_recoverable(self)
    }

    fn category(&self) -> ErrorCategory {
        ErrorCategory::Validation
    }
}

impl DiariesErrorTrait for HolidayError {
    fn is_recoverable(&self) -> bool {
        HolidayError::is_recoverable(self)
    }

    fn category(&self) -> ErrorCategory {
        holiday_category(self)
    }
}

fn holiday_category(err: &HolidayError) -> ErrorCategory {
    match err {
        e if e.is_network() => ErrorCategory::Network,
        HolidayError::InvalidLine { .. } | HolidayError::InvalidEntry(_) => {
            ErrorCategory::Validation
        }
        _ => ErrorCategory::Storage,
    }
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a generic error with context
    pub fn other(context: impl Into<String>) -> Self {
        Self::Other {
            context: context.into(),
            source: None,
        }
    }

    /// Create a generic error with context and source
    pub fn with_source(
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Other {
            context: context.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::Other {
            context: format!("{err:#}"),
            source: None,
        }
    }
}

/// Result type alias using the unified Error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_category() {
        let diary_err = Error::Diary(DiaryError::InvalidEdition { edition: 0 });
        assert_eq!(diary_err.category(), ErrorCategory::Validation);

        let offline = Error::Holiday(HolidayError::Offline);
        assert_eq!(offline.category(), ErrorCategory::Network);

        let bad_line = Error::Holiday(HolidayError::InvalidLine {
            line: 3,
            content: "garbage".into(),
        });
        assert_eq!(bad_line.category(), ErrorCategory::Validation);
        let holiday_err = HolidayError::InvalidLine {
            line: 3,
            content: String::new(),
        };
        assert_eq!(bad_line.category(), holiday_err.category());
    }

    #[test]
    fn test_is_recoverable() {
        let timeout = Error::Holiday(HolidayError::Timeout { year: 2024 });
        assert!(timeout.is_recoverable());

        let diary_err = Error::Diary(DiaryError::InvalidEdition { edition: -1 });
        assert!(!diary_err.is_recoverable());
    }

    #[test]
    fn test_error_conversion() {
        let unified: Error = DiaryError::InvalidEdition { edition: 0 }.into();
        assert!(matches!(unified, Error::Diary(_)));
        assert_eq!(unified.to_string(), DiaryError::InvalidEdition { edition: 0 }.to_string());
    }

    #[test]
    fn test_config_error() {
        let err = Error::config("missing roster");
        assert_eq!(err.category(), ErrorCategory::Config);
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_anyhow_conversion() {
        let err: Error = anyhow::anyhow!("Something went wrong").into();
        assert_eq!(err.category(), ErrorCategory::Other);
        assert_eq!(err.to_string(), "Something went wrong");
    }
}
