use thiserror::Error;

/// The main error type for the `fibre_inject` library.
///
/// Resolution is permissive: an unknown name is not an error and simply
/// resolves to `None`. The variants below cover the cases where a binding
/// exists but could not produce a value, plus configuration loading.
#[derive(Debug, Error)]
pub enum Error {
  #[error("Circular dependency detected while resolving '{name}' in container '{container}'")]
  CircularDependency { container: String, name: String },

  #[error("Required dependency '{name}' could not be resolved")]
  MissingDependency { name: String },

  #[error("Failed to construct '{name}': {reason}")]
  Construction { name: String, reason: String },

  #[error("Failed to read configuration file: {0}")]
  ConfigRead(#[from] std::io::Error),

  #[error("Failed to parse configuration: {0}")]
  ConfigParse(#[from] serde_yaml::Error),

  #[error("Invalid configuration value for '{field}': {message}")]
  InvalidConfigValue { field: String, message: String },
}

impl Error {
  /// Shorthand for a [`Error::Construction`] raised from an `Injectable` constructor.
  pub fn construction(name: impl Into<String>, reason: impl Into<String>) -> Self {
    Error::Construction {
      name: name.into(),
      reason: reason.into(),
    }
  }
}

/// A specialized `Result` type for `fibre_inject` operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
