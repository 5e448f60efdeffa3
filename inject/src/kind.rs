//! Service classification and binding scopes.

use std::any::{type_name, Any, TypeId};
use std::fmt;

/// The kind of a bound service, fixed when the service is created.
///
/// The kind decides how the container resolves a binding: only `Class`
/// services are instantiated, every other kind is handed back as bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceKind {
  Function,
  Class,
  Object,
  Other,
}

impl ServiceKind {
  /// Classifies a plain value by its type.
  ///
  /// Scalars and strings are `Other`; anything else is treated as an
  /// `Object`.
  pub fn of_value<T: Any>() -> Self {
    let id = TypeId::of::<T>();
    if primitive_type_ids().contains(&id) {
      ServiceKind::Other
    } else {
      ServiceKind::Object
    }
  }
}

impl fmt::Display for ServiceKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let s = match self {
      ServiceKind::Function => "function",
      ServiceKind::Class => "class",
      ServiceKind::Object => "object",
      ServiceKind::Other => "other",
    };
    f.write_str(s)
  }
}

/// Lifecycle policy of a binding.
///
/// `Singleton` caches one class instance per container. `Scoped` never
/// caches, so every resolution constructs a fresh instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scope {
  #[default]
  Singleton,
  Scoped,
}

fn primitive_type_ids() -> [TypeId; 19] {
  [
    TypeId::of::<()>(),
    TypeId::of::<bool>(),
    TypeId::of::<char>(),
    TypeId::of::<i8>(),
    TypeId::of::<i16>(),
    TypeId::of::<i32>(),
    TypeId::of::<i64>(),
    TypeId::of::<i128>(),
    TypeId::of::<isize>(),
    TypeId::of::<u8>(),
    TypeId::of::<u16>(),
    TypeId::of::<u32>(),
    TypeId::of::<u64>(),
    TypeId::of::<u128>(),
    TypeId::of::<usize>(),
    TypeId::of::<f32>(),
    TypeId::of::<f64>(),
    TypeId::of::<String>(),
    TypeId::of::<&'static str>(),
  ]
}

/// Returns the last path segment of `T`'s type name, without generic arguments.
///
/// `my_app::repo::UserRepository<Pg>` becomes `UserRepository`.
pub fn short_type_name<T: ?Sized>() -> &'static str {
  let full = type_name::<T>();
  let base = match full.find('<') {
    Some(idx) => &full[..idx],
    None => full,
  };
  base.rsplit("::").next().unwrap_or(base)
}

/// Returns the name of a named function item.
///
/// Closures, function pointers, references and generic instantiations have
/// no usable name and yield `None`.
pub fn fn_item_name<F: ?Sized>() -> Option<&'static str> {
  let full = type_name::<F>();
  if full.is_empty() || full.contains(&['{', '(', '<', '&', '[', ' '][..]) {
    return None;
  }
  full.rsplit("::").next()
}
