//! Construct-once registries for crawler collaborators.
//!
//! Handlers and policies are plain enums of built-in implementations; the
//! registries turn configuration into shared trait objects and guarantee a
//! given implementation is constructed at most once.

mod protocol;
mod schedule;

// Re-export public API
pub use protocol::{FileProtocol, HttpProtocol, Protocol, ProtocolKind, ProtocolRegistry};
pub use schedule::{
    AdaptiveFetchSchedule, DefaultFetchSchedule, FetchSchedule, FetchScheduleRegistry,
    ScheduleKind,
};
