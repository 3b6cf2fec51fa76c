//! Error types for the portal access boundary.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the evaluator, the session handlers and the lookups
//! can report.

use thiserror::Error;

/// The main error type for the portal access boundary.
///
/// # Example
///
/// ```
/// use portal_access::error::AccessError;
///
/// let error = AccessError::InvalidZone {
///     zone: "sidebar".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid zone: sidebar");
/// ```
#[derive(Debug, Error)]
pub enum AccessError {
    /// An exclusion check named a zone that is not registered.
    #[error("Invalid zone: {zone}")]
    InvalidZone {
        /// The zone name that was requested.
        zone: String,
    },

    /// The request-scoped storage failed to delete a session artifact.
    #[error("Failed to remove session artifact '{artifact}': {message}")]
    StorageRemovalFailure {
        /// Name of the artifact being removed.
        artifact: String,
        /// A description of the failure.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds values the portal cannot use.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// What was wrong with the configuration.
        message: String,
    },

    /// No holiday compensation entry exists for the country code.
    #[error("Unknown country: {code}")]
    UnknownCountry {
        /// The country code that was requested.
        code: String,
    },
}

/// A type alias for Results that return AccessError.
pub type AccessResult<T> = Result<T, AccessError>;
