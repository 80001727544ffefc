use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::storage::KeyValueStore;

/// Storage key holding the serialized user record.
pub const DEFAULT_SESSION_KEY: &str = "nutritiontrack_user";

/// Storage key for an optional JSON override of [`AppConfig`].
pub const CONFIG_KEY: &str = "nutritiontrack_config";

/// Runtime settings. Every field has a default so partial overrides work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub session_key: String,
    /// Simulated analysis latency in milliseconds.
    pub analysis_latency_ms: u64,
    pub min_password_len: usize,
    /// `tracing_subscriber::EnvFilter` directive for the console logger.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            session_key: DEFAULT_SESSION_KEY.to_string(),
            analysis_latency_ms: 2000,
            min_password_len: 6,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn analysis_latency(&self) -> Duration {
        Duration::from_millis(self.analysis_latency_ms)
    }

    /// Parse an override document; missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Load the override stored under [`CONFIG_KEY`], falling back to defaults
    /// when it is absent, unreadable or malformed.
    pub fn load(store: &impl KeyValueStore) -> Self {
        let raw = match store.get(CONFIG_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Self::default(),
            Err(e) => {
                warn!("Could not read config override: {}", e);
                return Self::default();
            }
        };

        match Self::from_json(&raw) {
            Ok(config) => {
                info!("Loaded config override from '{}'", CONFIG_KEY);
                config
            }
            Err(e) => {
                warn!("Ignoring malformed config override: {}", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.session_key, "nutritiontrack_user");
        assert_eq!(config.analysis_latency(), Duration::from_millis(2000));
        assert_eq!(config.min_password_len, 6);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let store = MemoryStore::with_entry(CONFIG_KEY, r#"{"analysis_latency_ms": 50}"#);
        let config = AppConfig::load(&store);
        assert_eq!(config.analysis_latency_ms, 50);
        assert_eq!(config.session_key, DEFAULT_SESSION_KEY);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_malformed_override_is_ignored() {
        let store = MemoryStore::with_entry(CONFIG_KEY, "{not json");
        assert_eq!(AppConfig::load(&store), AppConfig::default());
    }
}
