use fibre_inject::{get_container, Arguments, BindOptions, Injectable, Result, Scope, Service};
use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};

// A simple service that gets a unique ID upon creation.
struct RequestTracker {
  id: usize,
}

// A global, thread-safe counter to generate unique IDs.
static ID_COUNTER: AtomicUsize = AtomicUsize::new(0);

impl Injectable for RequestTracker {
  fn construct(_args: Arguments) -> Result<Self> {
    println!("Creating RequestTracker...");
    Ok(RequestTracker {
      id: ID_COUNTER.fetch_add(1, Ordering::SeqCst),
    })
  }
}

fn main() {
  let container = get_container(Some("trackers"));

  // --- Singleton Registration ---
  // The constructor runs only on the first resolution.
  container.bind_class_with_name::<RequestTracker>("singleton_tracker");

  // --- Scoped Registration ---
  // The constructor runs on EVERY resolution.
  container.bind(
    Service::class::<RequestTracker>(),
    BindOptions::named("scoped_tracker").scope(Scope::Scoped),
  );

  println!("--- Resolving Singletons ---");
  let s1 = container.resolve_as::<RequestTracker>("singleton_tracker").unwrap();
  let s2 = container.resolve_as::<RequestTracker>("singleton_tracker").unwrap();
  println!("Singleton 1 ID: {}, Singleton 2 ID: {}", s1.id, s2.id);
  assert_eq!(s1.id, 0);
  assert_eq!(s2.id, 0);
  assert!(
    Arc::ptr_eq(&s1, &s2),
    "Singleton instances should be identical"
  );
  println!("Singleton instances are the same pointer, as expected.\n");

  println!("--- Resolving Scoped ---");
  let t1 = container.resolve_as::<RequestTracker>("scoped_tracker").unwrap();
  let t2 = container.resolve_as::<RequestTracker>("scoped_tracker").unwrap();
  println!("Scoped 1 ID: {}, Scoped 2 ID: {}", t1.id, t2.id);
  assert_eq!(t1.id, 1);
  assert_eq!(t2.id, 2);
  assert!(!Arc::ptr_eq(&t1, &t2), "Scoped instances should be different");
  println!("Scoped instances are different pointers, as expected.");
}
