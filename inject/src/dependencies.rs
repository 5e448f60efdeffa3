//! The dependency bundle handed to injected callbacks.

use crate::service::{downcast, Instance};
use indexmap::IndexMap;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Resolved dependencies keyed by binding name, in registration order.
///
/// A bundle built from a single container maps each bound name to its
/// resolved value. A bundle built from several containers maps each container
/// name to that container's own `Dependencies`, reachable through
/// [`Dependencies::container`].
///
/// A name can be present with no value when its binding failed to resolve.
#[derive(Clone, Default)]
pub struct Dependencies {
  entries: IndexMap<String, Option<Instance>>,
}

impl Dependencies {
  pub fn new() -> Self {
    Self::default()
  }

  pub(crate) fn insert(&mut self, name: impl Into<String>, value: Option<Instance>) {
    self.entries.insert(name.into(), value);
  }

  /// Returns the dependency `name` downcast to `T`.
  pub fn get<T: Any + Send + Sync>(&self, name: &str) -> Option<Arc<T>> {
    self.get_raw(name).and_then(downcast::<T>)
  }

  pub fn get_raw(&self, name: &str) -> Option<&Instance> {
    self.entries.get(name).and_then(Option::as_ref)
  }

  /// Returns the nested bundle of container `name` in a multi-container bundle.
  pub fn container(&self, name: &str) -> Option<Arc<Dependencies>> {
    self.get::<Dependencies>(name)
  }

  pub fn contains(&self, name: &str) -> bool {
    self.entries.contains_key(name)
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn names(&self) -> impl Iterator<Item = &str> {
    self.entries.keys().map(String::as_str)
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Instance>)> {
    self
      .entries
      .iter()
      .map(|(name, value)| (name.as_str(), value.as_ref()))
  }
}

impl fmt::Debug for Dependencies {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_map()
      .entries(self.entries.iter().map(|(k, v)| (k, v.is_some())))
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_typed_lookup() {
    let mut deps = Dependencies::new();
    deps.insert("port", Some(Arc::new(8080u16) as Instance));
    deps.insert("broken", None);

    assert_eq!(*deps.get::<u16>("port").unwrap(), 8080);
    assert!(deps.get::<u32>("port").is_none());
    assert!(deps.contains("broken"));
    assert!(deps.get_raw("broken").is_none());
    assert_eq!(deps.names().collect::<Vec<_>>(), vec!["port", "broken"]);
  }

  #[test]
  fn test_nested_container_bundle() {
    let mut inner = Dependencies::new();
    inner.insert("db", Some(Arc::new("postgres") as Instance));

    let mut outer = Dependencies::new();
    outer.insert("main", Some(Arc::new(inner) as Instance));

    let main = outer.container("main").unwrap();
    assert_eq!(*main.get::<&str>("db").unwrap(), "postgres");
    assert!(outer.container("missing").is_none());
  }
}
