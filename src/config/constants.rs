//! Configuration constants.
//!
//! This module defines the constants used throughout the extraction pipeline
//! and the fetch schedule defaults.

use std::time::Duration;

/// Maximum length of a derived script title in characters.
///
/// Standalone JavaScript resources have no real title, so the first line of
/// the script stands in for one, cut off at this length.
pub const MAX_TITLE_LEN: usize = 80;

/// Content type prefix accepted by the standalone script entry point.
///
/// A declared content type that does not start with this prefix
/// (case-insensitively) is rejected before any scanning happens.
pub const JS_CONTENT_TYPE: &str = "application/x-javascript";

// Fetch schedule defaults
/// Default re-fetch interval (30 days).
pub const DEFAULT_FETCH_INTERVAL: Duration = Duration::from_secs(30 * 24 * 60 * 60);
/// Smallest interval the adaptive schedule may shrink to (1 minute).
pub const MIN_FETCH_INTERVAL: Duration = Duration::from_secs(60);
/// Largest interval the adaptive schedule may grow to (365 days).
pub const MAX_FETCH_INTERVAL: Duration = Duration::from_secs(365 * 24 * 60 * 60);
/// Fraction by which the adaptive schedule shrinks the interval when a page changed.
pub const ADAPTIVE_DEC_RATE: f64 = 0.2;
/// Fraction by which the adaptive schedule grows the interval when a page did not change.
pub const ADAPTIVE_INC_RATE: f64 = 0.4;

/// Fetch schedule implementation selected when none is configured.
pub const DEFAULT_FETCH_SCHEDULE: &str = "default";
