use fibre_inject::{get_container, resolve};
use std::panic;

struct UnregisteredService;

fn main() {
  // --- Using the non-panicking `resolve_as()` method ---
  println!("Attempting to resolve a service that was never bound...");

  match get_container(None).resolve_as::<UnregisteredService>("unregistered") {
    Some(_) => panic!("Should not have found the service!"),
    None => println!("Correctly received `None` for the missing service."),
  }

  // --- Using the panicking `resolve!` macro ---
  println!("\nNow, attempting the same with `resolve!`...");

  let result = panic::catch_unwind(|| {
    // This line will panic!
    let _service = resolve!(UnregisteredService, "unregistered");
  });

  assert!(result.is_err(), "resolve! should have panicked.");
  println!("Successfully caught the expected panic from resolve!.");
}
