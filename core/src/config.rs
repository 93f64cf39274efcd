//! Call configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;

/// Environment variable read by [`CallConfig::from_env`].
pub const TIMEOUT_ENV: &str = "OUTCOME_CALL_TIMEOUT_MS";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings shared by every call an adapter produces.
///
/// Deserializable so hosts can embed it in their own configuration files.
/// The only field is `timeout_ms`; when it is missing the default applies, and
/// zero is rejected the same way [`CallConfig::with_timeout`] rejects it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawCallConfig")]
pub struct CallConfig {
    timeout: Duration,
}

#[derive(Deserialize)]
#[serde(default)]
struct RawCallConfig {
    timeout_ms: u64,
}

impl Default for RawCallConfig {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT.as_millis() as u64,
        }
    }
}

impl TryFrom<RawCallConfig> for CallConfig {
    type Error = ConfigError;

    fn try_from(raw: RawCallConfig) -> Result<Self, Self::Error> {
        Self::with_timeout(Duration::from_millis(raw.timeout_ms))
    }
}

impl Default for CallConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl CallConfig {
    /// Fails with `ConfigError::ZeroTimeout` for `Duration::ZERO`.
    pub fn with_timeout(timeout: Duration) -> Result<Self, ConfigError> {
        if timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(Self { timeout })
    }

    /// Whole-call timeout reported by `OutcomeCall::timeout`.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Reads `OUTCOME_CALL_TIMEOUT_MS`, using the default when it is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let Some(raw) = lookup(TIMEOUT_ENV) else {
            return Ok(Self::default());
        };
        let timeout_ms: u64 = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
            name: TIMEOUT_ENV,
            value: raw.clone(),
        })?;
        Self::with_timeout(Duration::from_millis(timeout_ms))
    }
}
