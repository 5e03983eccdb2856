//! Unified error types for the Vistar viewer.

use std::fmt;

/// Application-specific errors.
#[derive(Debug)]
pub enum AppError {
    /// The source catalog could not be read or violates its invariants
    Catalog(String),
    /// The supplied address could not be parsed
    InvalidLocation(String),
    /// HTTP request for a status image failed
    ImageFetch(String),
    /// The fetched bytes are not a decodable image
    ImageDecode(String),
    /// Bad command line
    Usage(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Catalog(msg) => write!(f, "Catalog error: {}", msg),
            AppError::InvalidLocation(msg) => write!(f, "Invalid address: {}", msg),
            AppError::ImageFetch(msg) => write!(f, "Image fetch error: {}", msg),
            AppError::ImageDecode(msg) => write!(f, "Image decode error: {}", msg),
            AppError::Usage(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<image::ImageError> for AppError {
    fn from(err: image::ImageError) -> Self {
        AppError::ImageDecode(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::ImageFetch(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Catalog(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Catalog(err.to_string())
    }
}

/// Type alias for Results in this application.
pub type Result<T> = std::result::Result<T, AppError>;
