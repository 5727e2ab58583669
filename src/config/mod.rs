//! Application configuration and constants.
//!
//! This module provides:
//! - Pipeline constants (title length, content type gate)
//! - Fetch schedule interval defaults
//! - CLI option types and the library `Config` struct

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
