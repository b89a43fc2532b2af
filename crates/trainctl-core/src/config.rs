//! Harness configuration.
//!
//! Defaults reproduce the fixed behaviour of the harness: local service on
//! port 8000, `{"learning_rate":0.001,"epochs":10}`, 5s / 2s settle waits and
//! the well-known unused task id for the not-found check.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::JobRequestSpec;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Task id that no service run will ever hand out.
pub const UNKNOWN_TASK_ID: &str = "train_0.001_5_9999999999999";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    pub base_url: String,

    /// Payload for the happy path start.
    pub train_request: JobRequestSpec,

    /// Wait after start, before listing running tasks.
    #[serde(with = "duration_secs")]
    pub start_settle: Duration,

    /// Wait after stop, before listing running tasks again.
    #[serde(with = "duration_secs")]
    pub stop_settle: Duration,

    /// Identifier used by the not-found check.
    pub unknown_task_id: String,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            train_request: JobRequestSpec::default(),
            start_settle: Duration::from_secs(5),
            stop_settle: Duration::from_secs(2),
            unknown_task_id: UNKNOWN_TASK_ID.to_string(),
        }
    }
}

impl HarnessConfig {
    /// Same scenario shape with no waiting at all.
    pub fn without_waits(mut self) -> Self {
        self.start_settle = Duration::ZERO;
        self.stop_settle = Duration::ZERO;
        self
    }
}

/// Durations as (fractional) seconds in config files.
mod duration_secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_f64(d.as_secs_f64())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(d)?;
        Duration::try_from_secs_f64(secs).map_err(serde::de::Error::custom)
    }
}
