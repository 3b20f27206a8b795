//! Environment configuration for the default store wiring.

use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_DATA_DIR: &str = ".";
const DEFAULT_VERIFY_DELAY_MS: u64 = 1000;

/// Knobs for the default file-backed, mock-verified session store,
/// loaded from environment variables.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Directory holding the persisted session record.
    pub data_dir: PathBuf,
    /// Simulated verifier round-trip latency.
    pub verify_delay: Duration,
}

impl SessionConfig {
    /// Load from `ASME_DATA_DIR` and `ASME_VERIFY_DELAY_MS`, falling back
    /// to the defaults for anything missing or unparseable.
    #[must_use]
    pub fn from_env() -> Self {
        let data_dir = std::env::var("ASME_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR));
        let delay_ms = env_parse("ASME_VERIFY_DELAY_MS", DEFAULT_VERIFY_DELAY_MS);
        Self {
            data_dir,
            verify_delay: Duration::from_millis(delay_ms),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            verify_delay: Duration::from_millis(DEFAULT_VERIFY_DELAY_MS),
        }
    }
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
