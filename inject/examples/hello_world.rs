use fibre_inject::{get_container, inject_in_curried, Dependencies, InjectOptions};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
struct User {
  username: &'static str,
  email: &'static str,
}

struct Db {
  users: Vec<User>,
}

// A repository factory: it takes its dependencies and returns the lookup itself.
fn get_user_repository(deps: Dependencies) -> impl Fn(&str) -> Option<User> {
  let db = deps.get::<Db>("db");
  move |username: &str| {
    db.as_ref()?
      .users
      .iter()
      .find(|user| user.username == username)
      .cloned()
  }
}

fn di_init() {
  get_container(Some("default"))
    .bind_value(
      "db",
      Db {
        users: vec![
          User {
            username: "alice",
            email: "alice@example.com",
          },
          User {
            username: "bob",
            email: "bob@example.com",
          },
        ],
      },
    )
    .bind_function(get_user_repository);
}

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .init();

  di_init();

  // The wrapper resolves `db` on every call and passes only the username on.
  let find_user = inject_in_curried(get_user_repository, InjectOptions::new());
  println!("Wrapped callback is exposed as '{}'", find_user.name());

  let alice = find_user.call("alice");
  println!("Lookup 'alice': {:?}", alice);
  assert_eq!(alice.map(|u| u.email), Some("alice@example.com"));

  let nobody = find_user.call("mallory");
  println!("Lookup 'mallory': {:?}", nobody);
  assert!(nobody.is_none());
}
