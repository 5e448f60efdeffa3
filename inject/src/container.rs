//! The `Container` struct and its associated methods.

use crate::core::{Descriptor, ResolutionGuard};
use crate::dependencies::Dependencies;
use crate::error::Result;
use crate::kind::{Scope, ServiceKind};
use crate::service::{downcast, Arguments, BindOptions, ClassFactory, Injectable, Instance, Provider, Service};
use indexmap::IndexMap;
use parking_lot::RwLock;
use std::any::Any;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// A read-only snapshot of one binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
  pub name: String,
  pub kind: ServiceKind,
  pub scope: Scope,
  /// Whether a singleton class has already been constructed.
  pub instantiated: bool,
}

/// A named registry of bound services.
///
/// Bindings are kept in registration order. The container is thread-safe:
/// binding only needs `&self`, and a singleton class is constructed at most
/// once even when first resolved from several threads at the same time.
pub struct Container {
  name: String,
  dependencies: RwLock<IndexMap<String, Arc<Descriptor>>>,
}

impl Container {
  /// Creates a new, empty `Container`.
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      dependencies: RwLock::new(IndexMap::new()),
    }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  // --- Registration ---

  /// Binds `service`, replacing any binding with the same key.
  ///
  /// The key is `options.name`, falling back to the service's own name. A
  /// service with neither is skipped. Passing `None` is a no-op, so optional
  /// services can be bound in the same chain as required ones.
  pub fn bind(&self, service: impl Into<Option<Service>>, options: BindOptions) -> &Self {
    let Some(service) = service.into() else {
      return self;
    };
    let Some(key) = options.name.or_else(|| service.name().map(str::to_owned)) else {
      warn!(
        container = %self.name,
        kind = %service.kind(),
        "skipping binding of a service without a name"
      );
      return self;
    };

    debug!(
      container = %self.name,
      service = %key,
      kind = %service.kind(),
      scope = ?options.scope,
      "binding service"
    );
    let descriptor = Descriptor::new(key.clone(), service.kind(), options.scope, service.provider);
    self.dependencies.write().insert(key, Arc::new(descriptor));
    self
  }

  /// Binds a plain value under `name`.
  pub fn bind_value<T: Any + Send + Sync>(&self, name: &str, value: T) -> &Self {
    self.bind(Service::value(value), BindOptions::named(name))
  }

  /// Binds a callable under its own function name.
  pub fn bind_function<F: Any + Send + Sync>(&self, function: F) -> &Self {
    self.bind(Service::function(function), BindOptions::new())
  }

  pub fn bind_function_with_name<F: Any + Send + Sync>(&self, name: &str, function: F) -> &Self {
    self.bind(Service::function(function), BindOptions::named(name))
  }

  /// Binds a singleton class under its class name.
  pub fn bind_class<T: Injectable>(&self) -> &Self {
    self.bind(Service::class::<T>(), BindOptions::new())
  }

  pub fn bind_class_with_name<T: Injectable>(&self, name: &str) -> &Self {
    self.bind(Service::class::<T>(), BindOptions::named(name))
  }

  // --- Resolution ---

  /// Resolves `name` to a live value.
  ///
  /// Returns `None` when nothing is bound under `name`. Failures while
  /// constructing a class are logged and also reported as `None`; use
  /// [`Container::try_resolve`] to observe them.
  pub fn resolve(&self, name: &str) -> Option<Instance> {
    match self.try_resolve(name) {
      Ok(instance) => instance,
      Err(err) => {
        warn!(container = %self.name, service = %name, error = %err, "failed to resolve service");
        None
      }
    }
  }

  /// Resolves `name`, surfacing construction failures and dependency cycles.
  pub fn try_resolve(&self, name: &str) -> Result<Option<Instance>> {
    // Clone the descriptor out so the lock is not held while constructors run;
    // they resolve their own dependencies from this container.
    let Some(descriptor) = self.dependencies.read().get(name).cloned() else {
      trace!(container = %self.name, service = %name, "no binding found");
      return Ok(None);
    };

    match &descriptor.provider {
      Provider::Value(value) => Ok(Some(value.clone())),
      Provider::Class(factory) => match descriptor.scope {
        Scope::Singleton => {
          if let Some(instance) = descriptor.instance.get() {
            trace!(container = %self.name, service = %name, "returning cached instance");
            return Ok(Some(instance.clone()));
          }
          // Enter the guard before the cell: re-entering an initialising
          // `OnceCell` on the same thread would deadlock instead of failing.
          let _guard = ResolutionGuard::enter(&self.name, &descriptor.name)?;
          let instance = descriptor
            .instance
            .get_or_try_init(|| self.construct(&descriptor.name, factory))?;
          Ok(Some(instance.clone()))
        }
        Scope::Scoped => {
          let _guard = ResolutionGuard::enter(&self.name, &descriptor.name)?;
          self.construct(&descriptor.name, factory).map(Some)
        }
      },
    }
  }

  /// Resolves `name` and downcasts it to `T`.
  pub fn resolve_as<T: Any + Send + Sync>(&self, name: &str) -> Option<Arc<T>> {
    self.resolve(name).as_ref().and_then(downcast::<T>)
  }

  /// Resolves every binding, in registration order.
  pub fn resolve_all(&self) -> Dependencies {
    let names: Vec<String> = self.dependencies.read().keys().cloned().collect();
    let mut resolved = Dependencies::new();
    for name in names {
      let value = self.resolve(&name);
      resolved.insert(name, value);
    }
    resolved
  }

  fn construct(&self, name: &str, factory: &ClassFactory) -> Result<Instance> {
    debug!(
      container = %self.name,
      service = %name,
      dependencies = ?factory.constructor_dependencies,
      "constructing class instance"
    );
    let mut values = Vec::with_capacity(factory.constructor_dependencies.len());
    for dependency in factory.constructor_dependencies {
      values.push(self.try_resolve(dependency)?);
    }
    let args = Arguments::new(factory.constructor_dependencies.to_vec(), values);

    (factory.build)(args, &|dependency: &str| self.try_resolve(dependency))
  }

  // --- Introspection ---

  /// The number of bindings.
  pub fn len(&self) -> usize {
    self.dependencies.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.dependencies.read().is_empty()
  }

  pub fn contains(&self, name: &str) -> bool {
    self.dependencies.read().contains_key(name)
  }

  /// Bound names, in registration order.
  pub fn names(&self) -> Vec<String> {
    self.dependencies.read().keys().cloned().collect()
  }

  pub fn binding(&self, name: &str) -> Option<Binding> {
    self.dependencies.read().get(name).map(|d| Binding {
      name: d.name.clone(),
      kind: d.kind,
      scope: d.scope,
      instantiated: d.is_cached_class() && d.instance.get().is_some(),
    })
  }
}

impl fmt::Debug for Container {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Container")
      .field("name", &self.name)
      .field("dependencies", &self.names())
      .finish()
  }
}
