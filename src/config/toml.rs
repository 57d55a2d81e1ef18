use super::{ConfigError, SerializableConfig};
use std::path::Path;
use tokio::fs::read_to_string;

/// Reads a configuration file.
pub async fn read_config(path: &Path) -> Result<SerializableConfig, ConfigError> {
    Ok(::toml::from_str(&read_to_string(path).await?)?)
}
