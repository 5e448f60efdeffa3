//! Core, non-public data structures for the injection container.

use crate::error::{Error, Result};
use crate::kind::{Scope, ServiceKind};
use crate::service::{Instance, Provider};
use once_cell::sync::OnceCell;
use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;

thread_local! {
  // The set of bindings currently being constructed on this thread, keyed by
  // container and service name. Re-entering one means the graph has a cycle.
  static RESOLVING_STACK: RefCell<HashSet<ResolutionKey>> = RefCell::new(HashSet::new());
}

#[derive(Clone, PartialEq, Eq, Hash)]
pub(crate) struct ResolutionKey {
  container: String,
  name: String,
}

impl fmt::Debug for ResolutionKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Key(Container({}), Name({}))", self.container, self.name)
  }
}

/// An RAII guard that detects circular dependencies.
///
/// Entering adds the binding to the thread-local resolution stack and fails if
/// it is already there. Dropping the guard removes it again.
pub(crate) struct ResolutionGuard {
  key: ResolutionKey,
}

impl ResolutionGuard {
  pub(crate) fn enter(container: &str, name: &str) -> Result<Self> {
    let key = ResolutionKey {
      container: container.to_owned(),
      name: name.to_owned(),
    };
    let inserted = RESOLVING_STACK.with(|stack| stack.borrow_mut().insert(key.clone()));
    if !inserted {
      return Err(Error::CircularDependency {
        container: key.container,
        name: key.name,
      });
    }
    Ok(Self { key })
  }
}

impl Drop for ResolutionGuard {
  fn drop(&mut self) {
    RESOLVING_STACK.with(|stack| {
      stack.borrow_mut().remove(&self.key);
    });
  }
}

/// A bound service together with its cached instance slot.
///
/// `instance` is only ever filled for singleton classes, after their first
/// successful construction.
pub(crate) struct Descriptor {
  pub(crate) name: String,
  pub(crate) kind: ServiceKind,
  pub(crate) scope: Scope,
  pub(crate) provider: Provider,
  pub(crate) instance: OnceCell<Instance>,
}

impl Descriptor {
  pub(crate) fn new(name: String, kind: ServiceKind, scope: Scope, provider: Provider) -> Self {
    Self {
      name,
      kind,
      scope,
      provider,
      instance: OnceCell::new(),
    }
  }

  pub(crate) fn is_cached_class(&self) -> bool {
    matches!(self.provider, Provider::Class(_)) && self.scope == Scope::Singleton
  }
}

impl fmt::Debug for Descriptor {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Descriptor")
      .field("name", &self.name)
      .field("kind", &self.kind)
      .field("scope", &self.scope)
      .field("instantiated", &self.instance.get().is_some())
      .finish()
  }
}
