//! Wrapping callbacks so they receive their dependencies implicitly.

use crate::container::Container;
use crate::dependencies::Dependencies;
use crate::kind::fn_item_name;
use crate::service::Instance;
use std::fmt;
use std::sync::Arc;

/// Accepted for compatibility with callers that choose a resolution strategy.
///
/// Dependencies are always resolved when the wrapped callback is called, so
/// the value has no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolveType {
  #[default]
  Eager,
  Lazy,
}

/// Options for [`inject_in`](crate::inject_in) and [`inject_in_curried`](crate::inject_in_curried).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InjectOptions {
  /// Containers to resolve from. Empty means the registry's default at wrap time.
  pub containers: Vec<String>,
  /// Overrides the exposed name of the wrapped callback.
  pub callback_name: Option<String>,
  pub resolve_type: ResolveType,
}

impl InjectOptions {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn container(mut self, name: impl Into<String>) -> Self {
    self.containers.push(name.into());
    self
  }

  pub fn containers<I, S>(mut self, names: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.containers.extend(names.into_iter().map(Into::into));
    self
  }

  pub fn callback_name(mut self, name: impl Into<String>) -> Self {
    self.callback_name = Some(name.into());
    self
  }

  pub fn resolve_type(mut self, resolve_type: ResolveType) -> Self {
    self.resolve_type = resolve_type;
    self
  }
}

/// Removes every underscore, then lowercases the first character.
///
/// `get_user_repository` becomes `getuserrepository`, `GetUser` becomes `getUser`.
pub fn normalize_callback_name(raw: &str) -> String {
  let stripped: String = raw.chars().filter(|c| *c != '_').collect();
  let mut chars = stripped.chars();
  match chars.next() {
    Some(first) => first.to_lowercase().chain(chars).collect(),
    None => String::new(),
  }
}

/// Default exposed name of a callback of type `F`. Closures have none.
pub(crate) fn callback_name<F>() -> String {
  fn_item_name::<F>()
    .map(normalize_callback_name)
    .unwrap_or_default()
}

fn bundle(containers: &[Arc<Container>]) -> Dependencies {
  match containers {
    [single] => single.resolve_all(),
    many => {
      let mut bundle = Dependencies::new();
      for container in many {
        let nested: Instance = Arc::new(container.resolve_all());
        bundle.insert(container.name(), Some(nested));
      }
      bundle
    }
  }
}

/// A callback that receives a fresh dependency bundle ahead of its arguments.
///
/// The callback has the shape `Fn(Dependencies, A) -> R`; [`Injected::call`]
/// takes only `A`. Use `()` for callbacks without explicit arguments.
///
/// ```
/// use fibre_inject::{Dependencies, InjectOptions, Registry};
///
/// let registry = Registry::new();
/// registry.default_container().bind_value("greeting", String::from("Hello"));
///
/// let greet = registry.inject_in(
///   |deps: Dependencies, name: &str| format!("{}, {}!", deps.get::<String>("greeting").unwrap(), name),
///   InjectOptions::new(),
/// );
/// assert_eq!(greet.call("Ada"), "Hello, Ada!");
/// ```
pub struct Injected<F> {
  name: String,
  containers: Vec<Arc<Container>>,
  callback: F,
}

impl<F> Injected<F> {
  pub(crate) fn new(name: String, containers: Vec<Arc<Container>>, callback: F) -> Self {
    Self {
      name,
      containers,
      callback,
    }
  }

  /// The exposed name, fixed at construction.
  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn container_names(&self) -> Vec<&str> {
    self.containers.iter().map(|c| c.name()).collect()
  }

  /// Builds the bundle the callback would receive right now.
  pub fn dependencies(&self) -> Dependencies {
    bundle(&self.containers)
  }

  pub fn call<A, R>(&self, args: A) -> R
  where
    F: Fn(Dependencies, A) -> R,
  {
    (self.callback)(self.dependencies(), args)
  }
}

impl<F> fmt::Debug for Injected<F> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Injected")
      .field("name", &self.name)
      .field("containers", &self.container_names())
      .finish_non_exhaustive()
  }
}

/// A factory-style callback: it takes the bundle and returns the function
/// that receives the explicit arguments.
///
/// The inner function never sees the bundle, only what [`Curried::call`] is
/// given.
pub struct Curried<F> {
  name: String,
  containers: Vec<Arc<Container>>,
  factory: F,
}

impl<F> Curried<F> {
  pub(crate) fn new(name: String, containers: Vec<Arc<Container>>, factory: F) -> Self {
    Self {
      name,
      containers,
      factory,
    }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn container_names(&self) -> Vec<&str> {
    self.containers.iter().map(|c| c.name()).collect()
  }

  pub fn dependencies(&self) -> Dependencies {
    bundle(&self.containers)
  }

  pub fn call<A, G, R>(&self, args: A) -> R
  where
    F: Fn(Dependencies) -> G,
    G: FnOnce(A) -> R,
  {
    let inner = (self.factory)(self.dependencies());
    inner(args)
  }
}

impl<F> fmt::Debug for Curried<F> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Curried")
      .field("name", &self.name)
      .field("containers", &self.container_names())
      .finish_non_exhaustive()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn get_user_repository(_deps: Dependencies) -> impl Fn(&str) -> bool {
    |_name: &str| true
  }

  #[test]
  fn test_normalize_callback_name() {
    assert_eq!(normalize_callback_name("GetUserRepository"), "getUserRepository");
    assert_eq!(normalize_callback_name("get_user_repository"), "getuserrepository");
    assert_eq!(normalize_callback_name("_Private__Thing"), "privateThing");
    assert_eq!(normalize_callback_name(""), "");
  }

  #[test]
  fn test_default_callback_name_comes_from_fn_item() {
    fn name_of<F>(_: &F) -> String {
      callback_name::<F>()
    }
    assert_eq!(name_of(&get_user_repository), "getuserrepository");
    assert_eq!(name_of(&|_: Dependencies| ()), "");
  }

  #[test]
  fn test_options_builder_collects_containers() {
    let options = InjectOptions::new()
      .container("a")
      .containers(["b", "c"])
      .callback_name("custom")
      .resolve_type(ResolveType::Lazy);

    assert_eq!(options.containers, vec!["a", "b", "c"]);
    assert_eq!(options.callback_name.as_deref(), Some("custom"));
    assert_eq!(options.resolve_type, ResolveType::Lazy);
  }
}
