//! Named containers and the default-container setting.

use crate::config::RegistryConfig;
use crate::container::Container;
use crate::inject::{Curried, InjectOptions, Injected};
use dashmap::DashMap;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

/// The name of the default container of a fresh registry.
pub const DEFAULT_CONTAINER_NAME: &str = "default";

/// Maps container names to containers and tracks which one is the default.
///
/// An application can own a `Registry` outright, or use the process-wide one
/// returned by [`global()`](crate::global). Containers are created on first
/// access and live as long as the registry.
pub struct Registry {
  containers: DashMap<String, Arc<Container>>,
  default_container: RwLock<String>,
}

impl Default for Registry {
  fn default() -> Self {
    Self {
      containers: DashMap::new(),
      default_container: RwLock::new(DEFAULT_CONTAINER_NAME.to_owned()),
    }
  }
}

impl Registry {
  /// Creates a new, empty `Registry` whose default container is `"default"`.
  pub fn new() -> Self {
    Self::default()
  }

  /// Creates a registry with the configured default and pre-created containers.
  pub fn from_config(config: &RegistryConfig) -> Self {
    let registry = Self::new();
    registry.set_default_container(config.default_container.as_str());
    for name in &config.containers {
      registry.container(name);
    }
    registry
  }

  /// Returns the container `name`, creating it on first access.
  pub fn container(&self, name: &str) -> Arc<Container> {
    if let Some(existing) = self.containers.get(name) {
      return existing.value().clone();
    }
    self
      .containers
      .entry(name.to_owned())
      .or_insert_with(|| {
        debug!(container = %name, "creating container");
        Arc::new(Container::new(name))
      })
      .value()
      .clone()
  }

  /// Returns the current default container.
  pub fn default_container(&self) -> Arc<Container> {
    let name = self.default_container_name();
    self.container(&name)
  }

  pub fn default_container_name(&self) -> String {
    self.default_container.read().clone()
  }

  /// Changes which container is used when no name is given.
  ///
  /// Containers created under the previous default are left untouched.
  pub fn set_default_container(&self, name: impl Into<String>) {
    let name = name.into();
    debug!(container = %name, "setting default container");
    *self.default_container.write() = name;
  }

  pub fn contains_container(&self, name: &str) -> bool {
    self.containers.contains_key(name)
  }

  pub fn container_names(&self) -> Vec<String> {
    let mut names: Vec<String> = self.containers.iter().map(|e| e.key().clone()).collect();
    names.sort();
    names
  }

  /// Wraps `callback` so each call receives this registry's dependency bundle.
  ///
  /// See [`Injected`].
  pub fn inject_in<F>(&self, callback: F, options: InjectOptions) -> Injected<F> {
    let (name, containers) = self.prepare::<F>(options);
    Injected::new(name, containers, callback)
  }

  /// Wraps a factory-style `callback` that takes the bundle and returns the real function.
  ///
  /// See [`Curried`].
  pub fn inject_in_curried<F>(&self, callback: F, options: InjectOptions) -> Curried<F> {
    let (name, containers) = self.prepare::<F>(options);
    Curried::new(name, containers, callback)
  }

  fn prepare<F>(&self, options: InjectOptions) -> (String, Vec<Arc<Container>>) {
    let names = if options.containers.is_empty() {
      vec![self.default_container_name()]
    } else {
      options.containers
    };
    let containers = names.iter().map(|name| self.container(name)).collect();
    let name = options
      .callback_name
      .unwrap_or_else(|| crate::inject::callback_name::<F>());
    (name, containers)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_container_is_created_once() {
    let registry = Registry::new();
    let first = registry.container("users");
    let second = registry.container("users");

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(registry.container_names(), vec!["users".to_string()]);
  }

  #[test]
  fn test_set_default_container() {
    let registry = Registry::new();
    assert_eq!(registry.default_container().name(), DEFAULT_CONTAINER_NAME);

    let old_default = registry.default_container();
    old_default.bind_value("port", 80u16);

    registry.set_default_container("x");
    let current = registry.default_container();
    assert_eq!(current.name(), "x");
    assert!(current.is_empty());
    // The previous default keeps its bindings.
    assert_eq!(registry.container(DEFAULT_CONTAINER_NAME).len(), 1);
  }
}
