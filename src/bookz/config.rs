use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_EXTENSION: &str = ".csv";

/// Configuration table consulted by command validation, stored in
/// config.json.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogConfig {
    /// File extension an ADD argument must carry (e.g. ".csv")
    #[serde(default = "default_data_extension")]
    pub data_extension: String,
}

fn default_data_extension() -> String {
    DEFAULT_DATA_EXTENSION.to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_extension: default_data_extension(),
        }
    }
}

impl CatalogConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CatalogError::SourceRead)?;
        let config: CatalogConfig =
            serde_json::from_str(&content).map_err(CatalogError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(CatalogError::SourceRead)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(CatalogError::Serialization)?;
        fs::write(config_path, content).map_err(CatalogError::SourceRead)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = CatalogConfig::default();
        assert_eq!(config.data_extension, ".csv");
    }

    #[test]
    fn load_missing_config_yields_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = CatalogConfig::load(temp_dir.path().join("absent")).unwrap();
        assert_eq!(config, CatalogConfig::default());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();

        let config = CatalogConfig {
            data_extension: ".tsv".to_string(),
        };
        config.save(temp_dir.path()).unwrap();

        let loaded = CatalogConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded, config);
    }
}
