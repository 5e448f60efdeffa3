//! Public macros for ergonomic, typed resolution from the global registry.

/// Resolves a typed service, returning `None` if it is missing or of another type.
///
/// ```
/// use fibre_inject::{get_container, maybe_resolve};
///
/// get_container(Some("macro_docs")).bind_value("limit", 10usize);
///
/// assert_eq!(*maybe_resolve!(usize, "limit", from "macro_docs").unwrap(), 10);
/// assert!(maybe_resolve!(String, "limit", from "macro_docs").is_none());
/// ```
#[macro_export]
macro_rules! maybe_resolve {
  // From the default container: maybe_resolve!(MyService, "name")
  ($type:ty, $name:expr) => {
    $crate::get_container(None).resolve_as::<$type>($name)
  };

  // From a named container: maybe_resolve!(MyService, "name", from "container")
  ($type:ty, $name:expr, from $container:expr) => {
    $crate::get_container(Some($container)).resolve_as::<$type>($name)
  };
}

/// Resolves a typed service from the global registry.
///
/// # Panics
///
/// Panics if the service cannot be resolved. For a non-panicking version,
/// use [`maybe_resolve!`] or `Container::resolve_as` directly.
///
/// ```
/// use fibre_inject::{get_container, resolve};
///
/// get_container(Some("resolve_docs")).bind_value("greeting", String::from("hello"));
///
/// let greeting = resolve!(String, "greeting", from "resolve_docs");
/// assert_eq!(*greeting, "hello");
/// ```
#[macro_export]
macro_rules! resolve {
  ($type:ty, $name:expr) => {
    $crate::maybe_resolve!($type, $name).unwrap_or_else(|| {
      panic!(
        "Failed to resolve required service '{}': {}",
        $name,
        std::any::type_name::<$type>()
      )
    })
  };

  ($type:ty, $name:expr, from $container:expr) => {
    $crate::maybe_resolve!($type, $name, from $container).unwrap_or_else(|| {
      panic!(
        "Failed to resolve required service '{}' from container '{}': {}",
        $name,
        $container,
        std::any::type_name::<$type>()
      )
    })
  };
}
