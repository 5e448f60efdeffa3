//! The global registry instance and access functions.

use crate::container::Container;
use crate::inject::{Curried, InjectOptions, Injected};
use crate::registry::Registry;
use once_cell::sync::Lazy;
use std::sync::Arc;

// The one and only global registry.
// It will be created on its first access in a thread-safe manner.
static GLOBAL_REGISTRY: Lazy<Registry> = Lazy::new(Registry::new);

/// Provides a reference to the global registry.
///
/// # Examples
///
/// ```
/// use fibre_inject::global;
///
/// global().container("settings").bind_value("retries", 3u32);
/// assert_eq!(*global().container("settings").resolve_as::<u32>("retries").unwrap(), 3);
/// ```
pub fn global() -> &'static Registry {
  &GLOBAL_REGISTRY
}

/// Returns the global container `name`, or the current default container for `None`.
pub fn get_container(name: Option<&str>) -> Arc<Container> {
  match name {
    Some(name) => global().container(name),
    None => global().default_container(),
  }
}

/// Changes the global default container name.
pub fn set_default_container(name: impl Into<String>) {
  global().set_default_container(name);
}

/// [`Registry::inject_in`] on the global registry.
pub fn inject_in<F>(callback: F, options: InjectOptions) -> Injected<F> {
  global().inject_in(callback, options)
}

/// [`Registry::inject_in_curried`] on the global registry.
pub fn inject_in_curried<F>(callback: F, options: InjectOptions) -> Curried<F> {
  global().inject_in_curried(callback, options)
}
