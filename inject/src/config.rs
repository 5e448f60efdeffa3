//! Registry configuration, loaded from YAML.

use crate::error::{Error, Result};
use crate::registry::DEFAULT_CONTAINER_NAME;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Startup settings for a [`Registry`](crate::Registry).
///
/// ```yaml
/// default_container: app
/// containers:
///   - app
///   - repositories
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
  #[serde(default = "default_container_name")]
  pub default_container: String,
  /// Containers created up front. Others are still created on first access.
  #[serde(default)]
  pub containers: Vec<String>,
}

fn default_container_name() -> String {
  DEFAULT_CONTAINER_NAME.to_string()
}

impl Default for RegistryConfig {
  fn default() -> Self {
    Self {
      default_container: default_container_name(),
      containers: Vec::new(),
    }
  }
}

impl RegistryConfig {
  pub fn from_yaml_str(yaml: &str) -> Result<Self> {
    let config: RegistryConfig = serde_yaml::from_str(yaml)?;
    config.validate()?;
    Ok(config)
  }

  pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
    let contents = fs::read_to_string(path)?;
    Self::from_yaml_str(&contents)
  }

  /// Rejects empty or blank container names.
  pub fn validate(&self) -> Result<()> {
    if self.default_container.trim().is_empty() {
      return Err(Error::InvalidConfigValue {
        field: "default_container".to_string(),
        message: "container name must not be empty".to_string(),
      });
    }
    if let Some(idx) = self.containers.iter().position(|n| n.trim().is_empty()) {
      return Err(Error::InvalidConfigValue {
        field: format!("containers[{}]", idx),
        message: "container name must not be empty".to_string(),
      });
    }
    Ok(())
  }
}
