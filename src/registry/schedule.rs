//! Fetch schedule policies and their registry.

use std::fmt::Debug;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use log::debug;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use crate::config::Config;
use crate::error_handling::ScheduleError;

/// A policy deciding how long to wait before refetching a page.
pub trait FetchSchedule: Debug + Send + Sync {
    /// Short name of the policy, for logs and diagnostics.
    fn name(&self) -> &'static str;

    /// Next fetch interval, given the current one and whether the page
    /// changed since it was last fetched.
    fn fetch_interval(&self, current: Duration, modified: bool) -> Duration;
}

/// The built-in fetch schedule implementations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ScheduleKind {
    /// Fixed refetch cadence.
    Default,
    /// Cadence that adapts to observed page changes.
    Adaptive,
}

impl ScheduleKind {
    fn construct(self, config: &Config) -> Arc<dyn FetchSchedule> {
        match self {
            ScheduleKind::Default => Arc::new(DefaultFetchSchedule {
                interval: config.fetch_interval,
            }),
            ScheduleKind::Adaptive => Arc::new(AdaptiveFetchSchedule {
                min_interval: config.min_fetch_interval,
                max_interval: config.max_fetch_interval,
                inc_rate: config.adaptive_inc_rate,
                dec_rate: config.adaptive_dec_rate,
            }),
        }
    }
}

/// Fixed-interval policy: every page is refetched on the same cadence.
#[derive(Debug)]
pub struct DefaultFetchSchedule {
    interval: Duration,
}

impl FetchSchedule for DefaultFetchSchedule {
    fn name(&self) -> &'static str {
        "default"
    }

    fn fetch_interval(&self, _current: Duration, _modified: bool) -> Duration {
        self.interval
    }
}

/// Adaptive policy: the interval shrinks while a page keeps changing and
/// grows while it stays the same, within configured bounds.
#[derive(Debug)]
pub struct AdaptiveFetchSchedule {
    min_interval: Duration,
    max_interval: Duration,
    inc_rate: f64,
    dec_rate: f64,
}

impl FetchSchedule for AdaptiveFetchSchedule {
    fn name(&self) -> &'static str {
        "adaptive"
    }

    fn fetch_interval(&self, current: Duration, modified: bool) -> Duration {
        let factor = if modified {
            1.0 - self.dec_rate
        } else {
            1.0 + self.inc_rate
        };
        let next = current.as_secs_f64() * factor;
        Duration::from_secs_f64(next.clamp(
            self.min_interval.as_secs_f64(),
            self.max_interval.as_secs_f64(),
        ))
    }
}

/// Hands out the configured fetch schedule.
///
/// The schedule implementation is picked by key at registry construction and
/// instantiated on first use; every later call returns the same instance.
#[derive(Debug)]
pub struct FetchScheduleRegistry {
    kind: ScheduleKind,
    config: Config,
    schedule: OnceLock<Arc<dyn FetchSchedule>>,
}

impl FetchScheduleRegistry {
    /// Selects the schedule implementation named by `config.fetch_schedule`.
    ///
    /// Fails when the key names no known implementation or the configured
    /// interval bounds are inverted.
    pub fn from_config(config: &Config) -> Result<Self, ScheduleError> {
        let kind = config.fetch_schedule.parse::<ScheduleKind>().map_err(|_| {
            ScheduleError::UnknownImplementation {
                key: config.fetch_schedule.clone(),
                known: ScheduleKind::iter()
                    .map(|k| k.to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            }
        })?;
        if config.min_fetch_interval > config.max_fetch_interval {
            return Err(ScheduleError::InvalidIntervalBounds {
                min: config.min_fetch_interval,
                max: config.max_fetch_interval,
            });
        }
        Ok(Self {
            kind,
            config: config.clone(),
            schedule: OnceLock::new(),
        })
    }

    /// The configured schedule, constructed on first call.
    pub fn schedule(&self) -> Arc<dyn FetchSchedule> {
        Arc::clone(self.schedule.get_or_init(|| {
            debug!("Constructing fetch schedule '{}'", self.kind);
            self.kind.construct(&self.config)
        }))
    }
}
