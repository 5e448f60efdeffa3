use fibre_inject::{
  get_container, inject_in, inject_in_curried, Dependencies, InjectOptions, Registry,
};
use pretty_assertions::assert_eq;
use std::sync::atomic::{AtomicUsize, Ordering};

// --- Test Fixtures ---

#[derive(Debug, Clone, PartialEq)]
struct User {
  username: &'static str,
  email: &'static str,
}

struct Db {
  users: Vec<User>,
}

fn users_db() -> Db {
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
  }
}

#[allow(non_snake_case)]
fn GetUserRepository(deps: Dependencies) -> impl Fn(&str) -> Option<User> {
  let db = deps.get::<Db>("db");
  move |username: &str| {
    db.as_ref()?
      .users
      .iter()
      .find(|user| user.username == username)
      .cloned()
  }
}

// --- Injection Tests ---

#[test]
fn test_hello_world_scenario() {
  // Arrange
  get_container(Some("injection_hello"))
    .bind_value("db", users_db())
    .bind_function(GetUserRepository);

  // Act
  let get_user_repository = inject_in_curried(
    GetUserRepository,
    InjectOptions::new().container("injection_hello"),
  );

  // Assert
  assert_eq!(get_user_repository.name(), "getUserRepository");
  assert_eq!(
    get_user_repository.call("alice").map(|u| u.email),
    Some("alice@example.com")
  );
  assert_eq!(get_user_repository.call("mallory"), None);
}

#[test]
fn test_bundle_is_sole_argument_without_explicit_args() {
  let registry = Registry::new();
  registry
    .container("main")
    .bind_value("port", 8080u16)
    .bind_value("host", "localhost");

  let describe = registry.inject_in(
    |deps: Dependencies, (): ()| deps.names().map(str::to_owned).collect::<Vec<_>>(),
    InjectOptions::new().container("main"),
  );

  assert_eq!(describe.call(()), vec!["port", "host"]);
}

#[test]
fn test_direct_callback_receives_bundle_then_args() {
  let registry = Registry::new();
  registry.default_container().bind_value("factor", 3i64);

  let scale = registry.inject_in(
    |deps: Dependencies, (a, b): (i64, i64)| {
      let factor = deps.get::<i64>("factor").map(|f| *f).unwrap_or(1);
      (a + b) * factor
    },
    InjectOptions::new(),
  );

  assert_eq!(scale.call((1, 2)), 9);
  // Closures have no name of their own.
  assert_eq!(scale.name(), "");
}

#[test]
fn test_curried_inner_function_receives_only_explicit_args() {
  let registry = Registry::new();
  registry.default_container().bind_value("prefix", String::from(">> "));

  let format = registry.inject_in_curried(
    |deps: Dependencies| {
      let prefix = deps.get::<String>("prefix");
      move |line: String| format!("{}{}", prefix.as_deref().map(String::as_str).unwrap_or(""), line)
    },
    InjectOptions::new().callback_name("formatLine"),
  );

  assert_eq!(format.call(String::from("ready")), ">> ready");
  assert_eq!(format.name(), "formatLine");
}

#[test]
fn test_multi_container_bundle_is_keyed_by_container() {
  let registry = Registry::new();
  registry.container("repos").bind_value("users", vec!["alice"]);
  registry.container("settings").bind_value("limit", 10usize);

  let wrapped = registry.inject_in(
    |deps: Dependencies, (): ()| deps,
    InjectOptions::new().containers(["repos", "settings"]),
  );
  let bundle = wrapped.call(());

  assert_eq!(bundle.names().collect::<Vec<_>>(), vec!["repos", "settings"]);
  let repos = bundle.container("repos").unwrap();
  assert_eq!(*repos.get::<Vec<&str>>("users").unwrap(), vec!["alice"]);
  let settings = bundle.container("settings").unwrap();
  assert_eq!(*settings.get::<usize>("limit").unwrap(), 10);
  assert_eq!(wrapped.container_names(), vec!["repos", "settings"]);
}

#[test]
fn test_empty_container_gives_empty_bundle() {
  let registry = Registry::new();
  let wrapped = registry.inject_in(
    |deps: Dependencies, (): ()| deps.len(),
    InjectOptions::new().container("nothing_bound"),
  );

  assert_eq!(wrapped.call(()), 0);
}

#[test]
fn test_bundle_is_rebuilt_on_every_call() {
  static CALLS: AtomicUsize = AtomicUsize::new(0);

  let registry = Registry::new();
  let container = registry.container("live");
  let wrapped = registry.inject_in(
    |deps: Dependencies, (): ()| {
      CALLS.fetch_add(1, Ordering::SeqCst);
      deps.len()
    },
    InjectOptions::new().container("live"),
  );

  assert_eq!(wrapped.call(()), 0);
  // Bindings added after wrapping are visible to later calls.
  container.bind_value("late", 1u8);
  assert_eq!(wrapped.call(()), 1);
  assert_eq!(CALLS.load(Ordering::SeqCst), 2);
}

#[test]
fn test_default_container_is_captured_at_wrap_time() {
  let registry = Registry::new();
  registry.container("before").bind_value("marker", "before");
  registry.container("after").bind_value("marker", "after");

  registry.set_default_container("before");
  let wrapped = registry.inject_in(
    |deps: Dependencies, (): ()| deps.get::<&str>("marker").map(|m| *m),
    InjectOptions::new(),
  );
  registry.set_default_container("after");

  assert_eq!(wrapped.call(()), Some("before"));
  assert_eq!(wrapped.container_names(), vec!["before"]);
}

#[test]
fn test_inject_in_uses_global_registry() {
  get_container(Some("injection_global")).bind_value("answer", 42u32);

  let answer = inject_in(
    |deps: Dependencies, (): ()| deps.get::<u32>("answer").map(|a| *a),
    InjectOptions::new().container("injection_global"),
  );

  assert_eq!(answer.call(()), Some(42));
}
