//! Error handling.
//!
//! This module defines the error types surfaced by logger initialization and
//! by the protocol and fetch schedule registries. Per-candidate extraction
//! failures are not errors; they are logged and skipped where they occur.

mod types;

// Re-export public API
pub use types::{InitializationError, ProtocolError, ScheduleError};
