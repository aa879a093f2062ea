//! Error types for the library layer.

use std::fmt;

/// Errors produced by the library layer, wrapping upstream API errors
/// and adding input validation failures.
#[derive(Debug)]
pub enum ApodError {
    /// An error from the underlying API client.
    Api(apod_api::Error),
    /// User-provided input failed validation. The message is the same one
    /// the search form surfaces.
    InvalidInput(String),
}

impl fmt::Display for ApodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::InvalidInput(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ApodError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl From<apod_api::Error> for ApodError {
    fn from(e: apod_api::Error) -> Self {
        Self::Api(e)
    }
}
