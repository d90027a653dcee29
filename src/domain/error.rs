//! Error types for the mediashelf library.
//!
//! This module defines the centralized error type [`MediashelfError`] and a type
//! alias [`Result`] for convenient error handling throughout the crate. All errors
//! are implemented using the `thiserror` crate for automatic `Error` trait
//! implementation.

use thiserror::Error;

/// The main error type for mediashelf operations.
///
/// This enum consolidates all error conditions that can occur while driving the
/// gallery view, from network failures during listing fetches to rejected page
/// navigation input. Transport errors from `reqwest` and I/O errors convert
/// automatically.
#[derive(Debug, Error)]
pub enum MediashelfError {
    /// Network operation failed.
    ///
    /// Covers both transport-level failures and non-2xx HTTP responses on the
    /// listing fetch and delete endpoints. The string describes what went wrong.
    #[error("Network error: {0}")]
    Network(String),

    /// Page-input validation failed.
    ///
    /// Occurs when a committed page number is non-numeric or falls outside the
    /// valid range `[1, total_pages]` for the active category. Surfaced to the
    /// user; never mutates pagination state.
    #[error("Invalid page: {0}")]
    Validation(String),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when a configuration file cannot be parsed or carries values the
    /// gallery cannot operate with (for example a zero page size).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations (configuration file
    /// reads). Automatically converts from `std::io::Error`.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for MediashelfError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

/// A specialized `Result` type for mediashelf operations.
///
/// This is a type alias for `std::result::Result<T, MediashelfError>` that
/// simplifies function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, MediashelfError>;
