//! Error types for the UserSpot plugin.
//!
//! This module defines the centralized error type [`UserspotError`] and a type alias
//! [`Result`] used throughout the plugin. Form validation problems are not errors in
//! this sense; they are reported as per-field data by the form model.

use thiserror::Error;

/// The main error type for UserSpot operations.
///
/// None of these are fatal to the plugin. The shim logs them and the handler turns
/// fetch problems into an inline message plus an error notification.
///
/// # Examples
///
/// ```
/// use userspot::domain::UserspotError;
///
/// fn load() -> Result<(), UserspotError> {
///     Err(UserspotError::Fetch("status 503".to_string()))
/// }
/// assert!(load().is_err());
/// ```
#[derive(Debug, Error)]
pub enum UserspotError {
    /// The user list request failed or returned a non-success status.
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// A JSON payload (API response or mode file) could not be decoded.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reading or writing the persisted display mode failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for UserSpot operations.
pub type Result<T> = std::result::Result<T, UserspotError>;
