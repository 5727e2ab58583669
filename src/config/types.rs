//! Configuration types.
//!
//! This module defines enums used for command-line argument parsing and the
//! library configuration struct.

use std::time::Duration;

use clap::ValueEnum;
use strum::IntoEnumIterator;

use crate::config::constants::{
    ADAPTIVE_DEC_RATE, ADAPTIVE_INC_RATE, DEFAULT_FETCH_INTERVAL, DEFAULT_FETCH_SCHEDULE,
    MAX_FETCH_INTERVAL, MIN_FETCH_INTERVAL,
};
use crate::registry::ProtocolKind;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// Carries the collaborator settings consumed by the protocol and fetch
/// schedule registries. The extraction pipeline itself is configuration-free.
///
/// # Examples
///
/// ```
/// use js_outlinks::Config;
///
/// let config = Config {
///     fetch_schedule: "adaptive".to_string(),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Key selecting the fetch schedule implementation (`default` or `adaptive`)
    pub fetch_schedule: String,

    /// Re-fetch interval used by the default schedule
    pub fetch_interval: Duration,

    /// Lower bound for the adaptive schedule's interval
    pub min_fetch_interval: Duration,

    /// Upper bound for the adaptive schedule's interval
    pub max_fetch_interval: Duration,

    /// Fraction by which the adaptive schedule grows the interval on an unchanged page
    pub adaptive_inc_rate: f64,

    /// Fraction by which the adaptive schedule shrinks the interval on a changed page
    pub adaptive_dec_rate: f64,

    /// Protocol handlers to register
    pub protocols: Vec<ProtocolKind>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fetch_schedule: DEFAULT_FETCH_SCHEDULE.to_string(),
            fetch_interval: DEFAULT_FETCH_INTERVAL,
            min_fetch_interval: MIN_FETCH_INTERVAL,
            max_fetch_interval: MAX_FETCH_INTERVAL,
            adaptive_inc_rate: ADAPTIVE_INC_RATE,
            adaptive_dec_rate: ADAPTIVE_DEC_RATE,
            protocols: ProtocolKind::iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        // Test all LogLevel variants convert correctly to log::LevelFilter
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_log_level_ordering() {
        // Verify that log levels are ordered correctly (Error < Warn < Info < Debug < Trace)
        let error = log::LevelFilter::from(LogLevel::Error);
        let warn = log::LevelFilter::from(LogLevel::Warn);
        let info = log::LevelFilter::from(LogLevel::Info);
        let debug = log::LevelFilter::from(LogLevel::Debug);
        let trace = log::LevelFilter::from(LogLevel::Trace);

        // Each level should be more restrictive than the next
        assert!(error < warn);
        assert!(warn < info);
        assert!(info < debug);
        assert!(debug < trace);
    }

    #[test]
    fn test_log_format_debug() {
        // Test Debug trait implementation
        assert_eq!(format!("{:?}", LogFormat::Plain), "Plain");
        assert_eq!(format!("{:?}", LogFormat::Json), "Json");
    }

    #[test]
    fn test_config_default() {
        // Test Config default values
        let config = Config::default();
        assert_eq!(config.fetch_schedule, "default");
        assert_eq!(config.fetch_interval, Duration::from_secs(30 * 24 * 60 * 60));
        assert_eq!(config.min_fetch_interval, Duration::from_secs(60));
        assert_eq!(config.adaptive_inc_rate, 0.4);
        assert_eq!(config.adaptive_dec_rate, 0.2);
        // All builtin protocol kinds are registered by default
        assert!(config.protocols.contains(&ProtocolKind::Http));
        assert!(config.protocols.contains(&ProtocolKind::File));
    }
}
