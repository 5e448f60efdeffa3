//! Bindable services and the metadata contract for injectable classes.

use crate::error::{Error, Result};
use crate::kind::{fn_item_name, short_type_name, Scope, ServiceKind};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A resolved, type-erased service value.
pub type Instance = Arc<dyn Any + Send + Sync>;

/// Downcasts an [`Instance`] to a concrete type, returning `None` on a type mismatch.
pub fn downcast<T: Any + Send + Sync>(instance: &Instance) -> Option<Arc<T>> {
  instance.clone().downcast::<T>().ok()
}

/// A type whose instances the container can construct.
///
/// Implementors declare their own wiring: which names are passed to
/// [`Injectable::construct`] (in order), and which names are assigned
/// afterwards through [`Injectable::set_property`].
///
/// ```
/// use fibre_inject::{Arguments, Injectable, Result};
/// use std::sync::Arc;
///
/// struct Greeter {
///   greeting: Arc<String>,
/// }
///
/// impl Injectable for Greeter {
///   fn constructor_dependencies() -> &'static [&'static str] {
///     &["greeting"]
///   }
///
///   fn construct(args: Arguments) -> Result<Self> {
///     Ok(Greeter { greeting: args.required::<String>(0)? })
///   }
/// }
/// ```
pub trait Injectable: Sized + Send + Sync + 'static {
  /// The binding key used when no explicit name is given.
  fn class_name() -> &'static str {
    short_type_name::<Self>()
  }

  /// Dependency names resolved and passed positionally to `construct`.
  fn constructor_dependencies() -> &'static [&'static str] {
    &[]
  }

  /// `(property, dependency)` pairs assigned after construction.
  fn property_dependencies() -> &'static [(&'static str, &'static str)] {
    &[]
  }

  fn construct(args: Arguments) -> Result<Self>;

  /// Receives one resolved property dependency. `value` is `None` when the
  /// dependency name is not bound.
  fn set_property(&mut self, _property: &str, _value: Option<Instance>) {}
}

/// Positional constructor arguments, in `constructor_dependencies` order.
pub struct Arguments {
  names: Vec<&'static str>,
  values: Vec<Option<Instance>>,
}

impl Arguments {
  pub(crate) fn new(names: Vec<&'static str>, values: Vec<Option<Instance>>) -> Self {
    Self { names, values }
  }

  pub fn len(&self) -> usize {
    self.values.len()
  }

  pub fn is_empty(&self) -> bool {
    self.values.is_empty()
  }

  /// The raw value at `index`, if one was resolved.
  pub fn raw(&self, index: usize) -> Option<&Instance> {
    self.values.get(index).and_then(Option::as_ref)
  }

  /// The value at `index` downcast to `T`.
  pub fn get<T: Any + Send + Sync>(&self, index: usize) -> Option<Arc<T>> {
    self.raw(index).and_then(downcast::<T>)
  }

  /// Like [`Arguments::get`], but a missing or mistyped value is an error.
  pub fn required<T: Any + Send + Sync>(&self, index: usize) -> Result<Arc<T>> {
    self.get::<T>(index).ok_or_else(|| Error::MissingDependency {
      name: self
        .names
        .get(index)
        .map(|n| n.to_string())
        .unwrap_or_else(|| format!("#{}", index)),
    })
  }
}

impl fmt::Debug for Arguments {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_map()
      .entries(
        self
          .names
          .iter()
          .zip(self.values.iter().map(Option::is_some)),
      )
      .finish()
  }
}

/// Resolves one dependency name from the owning container.
pub(crate) type Resolver<'a> = dyn Fn(&str) -> Result<Option<Instance>> + 'a;

type ClassBuilder = dyn Fn(Arguments, &Resolver<'_>) -> Result<Instance> + Send + Sync;

/// Everything the container needs to build an `Injectable` without knowing its type.
pub(crate) struct ClassFactory {
  pub(crate) constructor_dependencies: &'static [&'static str],
  pub(crate) build: Box<ClassBuilder>,
}

impl ClassFactory {
  fn of<T: Injectable>() -> Self {
    Self {
      constructor_dependencies: T::constructor_dependencies(),
      build: Box::new(|args: Arguments, resolve: &Resolver<'_>| {
        // Properties are resolved only once the instance exists.
        let mut instance = T::construct(args)?;
        for &(property, dependency) in T::property_dependencies() {
          instance.set_property(property, resolve(dependency)?);
        }
        Ok(Arc::new(instance) as Instance)
      }),
    }
  }
}

pub(crate) enum Provider {
  Value(Instance),
  Class(ClassFactory),
}

/// A value ready to be bound into a container.
///
/// The constructor used decides the [`ServiceKind`], so the container never
/// has to inspect the value itself.
pub struct Service {
  name: Option<String>,
  kind: ServiceKind,
  pub(crate) provider: Provider,
}

impl Service {
  /// A plain value. Scalars and strings classify as `Other`, everything else as `Object`.
  ///
  /// Values carry no name of their own and must be bound with an explicit one.
  pub fn value<T: Any + Send + Sync>(value: T) -> Self {
    Self {
      name: None,
      kind: ServiceKind::of_value::<T>(),
      provider: Provider::Value(Arc::new(value)),
    }
  }

  /// A callable. Named function items default to their own name as binding key.
  pub fn function<F: Any + Send + Sync>(function: F) -> Self {
    Self {
      name: fn_item_name::<F>().map(str::to_owned),
      kind: ServiceKind::Function,
      provider: Provider::Value(Arc::new(function)),
    }
  }

  /// An `Injectable` type, constructed on resolution.
  pub fn class<T: Injectable>() -> Self {
    Self {
      name: Some(T::class_name().to_owned()),
      kind: ServiceKind::Class,
      provider: Provider::Class(ClassFactory::of::<T>()),
    }
  }

  /// The service's own name, used when a binding gives none.
  pub fn name(&self) -> Option<&str> {
    self.name.as_deref()
  }

  pub fn kind(&self) -> ServiceKind {
    self.kind
  }
}

impl fmt::Debug for Service {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Service")
      .field("name", &self.name)
      .field("kind", &self.kind)
      .finish_non_exhaustive()
  }
}

/// Options for [`Container::bind`](crate::Container::bind).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindOptions {
  pub name: Option<String>,
  pub scope: Scope,
}

impl BindOptions {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn named(name: impl Into<String>) -> Self {
    Self::new().name(name)
  }

  pub fn name(mut self, name: impl Into<String>) -> Self {
    self.name = Some(name.into());
    self
  }

  pub fn scope(mut self, scope: Scope) -> Self {
    self.scope = scope;
    self
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  struct Counter;

  impl Injectable for Counter {
    fn construct(_args: Arguments) -> Result<Self> {
      Ok(Counter)
    }
  }

  fn lookup(_id: u32) -> bool {
    true
  }

  #[test]
  fn test_service_kinds_and_names() {
    let value = Service::value(vec![1, 2, 3]);
    assert_eq!(value.kind(), ServiceKind::Object);
    assert_eq!(value.name(), None);

    let function = Service::function(lookup);
    assert_eq!(function.kind(), ServiceKind::Function);
    assert_eq!(function.name(), Some("lookup"));

    let class = Service::class::<Counter>();
    assert_eq!(class.kind(), ServiceKind::Class);
    assert_eq!(class.name(), Some("Counter"));
  }

  #[test]
  fn test_required_argument_reports_dependency_name() {
    let args = Arguments::new(vec!["db", "cache"], vec![Some(Arc::new(7u8) as Instance), None]);

    assert_eq!(*args.required::<u8>(0).unwrap(), 7);
    assert!(args.get::<String>(0).is_none());
    match args.required::<u8>(1) {
      Err(Error::MissingDependency { name }) => assert_eq!(name, "cache"),
      other => panic!("unexpected result: {:?}", other.map(|v| *v)),
    }
  }

  #[test]
  fn test_bind_options_builder() {
    let options = BindOptions::named("db").scope(Scope::Scoped);
    assert_eq!(options.name.as_deref(), Some("db"));
    assert_eq!(options.scope, Scope::Scoped);
  }
}
