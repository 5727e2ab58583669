//! Error type definitions.
//!
//! Extraction itself never fails: malformed bases and unresolvable candidates
//! are logged and skipped. The types here cover the places where failure is
//! real and fatal, namely process initialization and registry construction.

use std::time::Duration;

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for protocol registry construction and lookup.
#[derive(Error, Debug)]
pub enum ProtocolError {
    /// No registered handler advertises the URL's scheme.
    #[error("No protocol handler registered for scheme '{0}'")]
    NotFound(String),

    /// The URL could not be parsed, so no scheme could be extracted.
    #[error("Cannot determine protocol for invalid URL '{url}': {source}")]
    InvalidUrl {
        /// The offending URL string.
        url: String,
        /// The underlying parse failure.
        source: url::ParseError,
    },

    /// Two handlers declared the same scheme at registry construction.
    #[error("Duplicate protocol handler for scheme '{0}'")]
    DuplicateScheme(String),
}

/// Error types for fetch schedule selection.
#[derive(Error, Debug)]
pub enum ScheduleError {
    /// The configured key does not name a known schedule implementation.
    #[error("Unknown fetch schedule implementation '{key}' (known: {known})")]
    UnknownImplementation {
        /// The configured key.
        key: String,
        /// Comma-separated list of known implementation keys.
        known: String,
    },

    /// The configured fetch interval bounds are inverted.
    #[error("Fetch interval bounds are inverted: min {min:?} exceeds max {max:?}")]
    InvalidIntervalBounds {
        /// Configured lower bound.
        min: Duration,
        /// Configured upper bound.
        max: Duration,
    },
}
