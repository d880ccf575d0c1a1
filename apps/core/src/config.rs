use std::{env, path::PathBuf, time::Duration};
use thiserror::Error;

/// How many unread change events a subscriber may fall behind by
const DEFAULT_EVENT_CAPACITY: usize = 256;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Artificial delay each mutating store operation waits before committing
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Latency {
    pub authenticate: Duration,
    pub register: Duration,
    pub record_appointment: Duration,
    pub moderate: Duration,
    pub replace_profile: Duration,
    pub rate: Duration,
    pub transition: Duration,
}

impl Latency {
    /// Delays that mimic a slow backend
    pub fn simulated() -> Self {
        Self {
            authenticate: Duration::from_millis(500),
            register: Duration::from_millis(500),
            record_appointment: Duration::from_millis(500),
            moderate: Duration::from_millis(300),
            replace_profile: Duration::from_millis(500),
            rate: Duration::from_millis(300),
            transition: Duration::from_millis(300),
        }
    }

    /// No delays at all
    pub fn none() -> Self {
        Self {
            authenticate: Duration::ZERO,
            register: Duration::ZERO,
            record_appointment: Duration::ZERO,
            moderate: Duration::ZERO,
            replace_profile: Duration::ZERO,
            rate: Duration::ZERO,
            transition: Duration::ZERO,
        }
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self::simulated()
    }
}

#[derive(Clone, Debug)]
pub struct StoreConfig {
    latency: Latency,
    data_dir: Option<PathBuf>,
    event_capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            latency: Latency::simulated(),
            data_dir: None,
            event_capacity: DEFAULT_EVENT_CAPACITY,
        }
    }
}

impl StoreConfig {
    /// Build configuration from environment variables.
    ///
    /// - `BARBERBOOK_SIMULATED_LATENCY`: `true`/`false`, default `true`
    /// - `BARBERBOOK_DATA_DIR`: directory for persisted slots; slots stay in
    ///   memory when unset
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenv::dotenv().ok();

        let latency = match env::var("BARBERBOOK_SIMULATED_LATENCY") {
            Ok(value) => {
                if parse_flag(&value)? {
                    Latency::simulated()
                } else {
                    Latency::none()
                }
            }
            Err(_) => Latency::simulated(),
        };

        let data_dir = env::var("BARBERBOOK_DATA_DIR")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            latency,
            data_dir,
            event_capacity: DEFAULT_EVENT_CAPACITY,
        })
    }

    /// Configuration with no artificial delays, for tests and tooling
    pub fn instant() -> Self {
        Self {
            latency: Latency::none(),
            ..Self::default()
        }
    }

    pub fn with_latency(mut self, latency: Latency) -> Self {
        self.latency = latency;
        self
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    pub fn latency(&self) -> &Latency {
        &self.latency
    }

    pub fn data_dir(&self) -> Option<&PathBuf> {
        self.data_dir.as_ref()
    }

    pub fn event_capacity(&self) -> usize {
        self.event_capacity
    }
}

fn parse_flag(value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::Invalid(format!(
            "BARBERBOOK_SIMULATED_LATENCY must be true or false, got {}",
            other
        ))),
    }
}
