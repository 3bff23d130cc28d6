//! Configuration file loading.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ConfigError, ConfigResult};
use crate::models::ModuleConfiguration;

/// Loader for module configuration files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a configuration file, picking the format from its extension.
    pub fn load(path: &Path) -> ConfigResult<ModuleConfiguration> {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        let parse: fn(&str) -> ConfigResult<ModuleConfiguration> = match extension.as_str() {
            "yaml" | "yml" => Self::from_yaml_str,
            "json" => Self::from_json_str,
            "toml" => Self::from_toml_str,
            _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        };

        debug!("Loading module configuration from {:?}", path);
        let content = fs::read_to_string(path)?;
        let config = parse(&content)?;
        debug!(
            "Loaded configuration for schema namespace {}",
            config.schema_namespace()
        );
        Ok(config)
    }

    pub fn from_yaml_str(content: &str) -> ConfigResult<ModuleConfiguration> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> ConfigResult<ModuleConfiguration> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_toml_str(content: &str) -> ConfigResult<ModuleConfiguration> {
        Ok(toml::from_str(content)?)
    }
}
