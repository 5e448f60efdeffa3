//! # Fibre Inject
//!
//! A small, thread-safe dependency injection registry for Rust.
//!
//! Services are bound by name into named containers and resolved by name,
//! either one at a time or as a whole bundle handed to a callback.
//!
//! ## Core Concepts
//!
//! - **Container**: a named registry of bindings, resolved by name.
//! - **Service**: a value, a function, or an [`Injectable`] class. Classes are
//!   constructed on resolution with their declared dependencies; singleton
//!   classes are constructed once per container.
//! - **Registry**: maps container names to containers and remembers the
//!   default one. A process-wide registry is available through [`global()`].
//! - **Injection**: [`inject_in`] and [`inject_in_curried`] wrap a callback so
//!   every call receives a fresh [`Dependencies`] bundle.
//!
//! Resolution is permissive: an unknown name resolves to `None` rather than
//! an error.
//!
//! ## Quick Start
//!
//! ```
//! use fibre_inject::{get_container, inject_in_curried, Dependencies, InjectOptions};
//!
//! struct Db {
//!   users: Vec<&'static str>,
//! }
//!
//! fn find_user(deps: Dependencies) -> impl Fn(&str) -> Option<&'static str> {
//!   let db = deps.get::<Db>("db");
//!   move |name: &str| db.as_ref()?.users.iter().copied().find(|u| *u == name)
//! }
//!
//! get_container(Some("quick_start"))
//!   .bind_value("db", Db { users: vec!["alice", "bob"] })
//!   .bind_function(find_user);
//!
//! let find = inject_in_curried(find_user, InjectOptions::new().container("quick_start"));
//! assert_eq!(find.name(), "finduser");
//! assert_eq!(find.call("alice"), Some("alice"));
//! assert_eq!(find.call("carol"), None);
//! ```

mod config;
mod container;
mod core;
mod dependencies;
mod error;
mod global;
mod inject;
mod kind;
mod macros;
mod registry;
mod service;

pub use config::RegistryConfig;
pub use container::{Binding, Container};
pub use dependencies::Dependencies;
pub use error::{Error, Result};
pub use global::{get_container, global, inject_in, inject_in_curried, set_default_container};
pub use inject::{normalize_callback_name, Curried, InjectOptions, Injected, ResolveType};
pub use kind::{fn_item_name, short_type_name, Scope, ServiceKind};
pub use registry::{Registry, DEFAULT_CONTAINER_NAME};
pub use service::{downcast, Arguments, BindOptions, Injectable, Instance, Service};
