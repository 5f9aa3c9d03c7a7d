use crate::error::{ProtlogError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for protlog, stored in the data directory as config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProtlogConfig {
    /// Base URL of the sequence lookup service; `{id}.fasta` is appended.
    #[serde(default = "default_fetch_base_url")]
    pub fetch_base_url: String,
}

fn default_fetch_base_url() -> String {
    crate::fetch::DEFAULT_BASE_URL.to_string()
}

impl Default for ProtlogConfig {
    fn default() -> Self {
        Self {
            fetch_base_url: default_fetch_base_url(),
        }
    }
}

impl ProtlogConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ProtlogError::Io)?;
        let config: ProtlogConfig =
            serde_json::from_str(&content).map_err(ProtlogError::CorruptStore)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ProtlogError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ProtlogError::CorruptStore)?;
        fs::write(config_path, content).map_err(ProtlogError::Io)?;
        Ok(())
    }

    /// Get a config value by its CLI key name.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "fetch-url" => Some(self.fetch_base_url.clone()),
            _ => None,
        }
    }

    /// Set a config value by its CLI key name.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "fetch-url" => {
                self.fetch_base_url = value.trim_end_matches('/').to_string();
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = ProtlogConfig::default();
        assert_eq!(config.fetch_base_url, "https://www.uniprot.org/uniprot");
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        let config = ProtlogConfig::load(temp.path()).unwrap();
        assert_eq!(config, ProtlogConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();

        let config = ProtlogConfig {
            fetch_base_url: "http://localhost:9999/uniprot".to_string(),
        };
        config.save(temp.path()).unwrap();

        let loaded = ProtlogConfig::load(temp.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_get_and_set_by_key() {
        let mut config = ProtlogConfig::default();
        config.set("fetch-url", "http://localhost:9999/").unwrap();
        assert_eq!(
            config.get("fetch-url").unwrap(),
            "http://localhost:9999"
        );
        assert!(config.set("no-such-key", "x").is_err());
        assert!(config.get("no-such-key").is_none());
    }

    #[test]
    fn test_missing_key_falls_back_to_default() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("config.json"), "{}").unwrap();

        let config = ProtlogConfig::load(temp.path()).unwrap();
        assert_eq!(config.fetch_base_url, "https://www.uniprot.org/uniprot");
    }
}
