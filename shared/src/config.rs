use serde::{Deserialize, Serialize};

use crate::transaction::TransactionType;

/// Application settings. Everything has a default; a partial JSON object
/// only overrides the keys it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Session storage key holding the serialized transaction list
    pub storage_key: String,
    pub months_before: u32,
    pub months_after: u32,
    /// Type the form falls back to after each submission
    pub default_type: TransactionType,
    /// One of error, warn, info, debug, trace
    pub log_level: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            storage_key: "transactions".to_string(),
            months_before: 5,
            months_after: 5,
            default_type: TransactionType::Income,
            log_level: "info".to_string(),
        }
    }
}

impl TrackerConfig {
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Parsed `log_level`, falling back to `Info` when unrecognised
    pub fn log_level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = TrackerConfig::default();
        assert_eq!(config.storage_key, "transactions");
        assert_eq!(config.months_before, 5);
        assert_eq!(config.months_after, 5);
        assert_eq!(config.default_type, TransactionType::Income);
        assert_eq!(config.log_level_filter(), log::LevelFilter::Info);
    }

    #[test]
    fn test_partial_json_overrides() {
        let config = TrackerConfig::from_json(r#"{"months_after": 2, "log_level": "debug"}"#).unwrap();
        assert_eq!(config.months_after, 2);
        assert_eq!(config.months_before, 5);
        assert_eq!(config.log_level_filter(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_bad_log_level_falls_back() {
        let config = TrackerConfig {
            log_level: "loud".to_string(),
            ..TrackerConfig::default()
        };
        assert_eq!(config.log_level_filter(), log::LevelFilter::Info);
        assert!(TrackerConfig::from_json("[1, 2]").is_err());
    }
}
