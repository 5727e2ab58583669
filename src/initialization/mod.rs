//! Process initialization.
//!
//! Extraction needs no shared resources beyond the lazily compiled scan
//! patterns, so the only setup handled here is the logger.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
