use fibre_inject::{Dependencies, InjectOptions, Registry, RegistryConfig};

// A callback that reads from two containers at once. With several containers
// configured, the bundle is keyed by container name.
fn summarize(deps: Dependencies, (): ()) -> String {
  let repos = deps.container("repositories").unwrap_or_default();
  let settings = deps.container("settings").unwrap_or_default();

  let users = repos.get::<Vec<&str>>("users").map(|u| u.len()).unwrap_or(0);
  let limit = settings.get::<usize>("page_size").map(|l| *l).unwrap_or(0);
  format!("{} users, page size {}", users, limit)
}

fn main() {
  // An application-owned registry, configured up front instead of using the global one.
  let config = RegistryConfig::from_yaml_str(
    "default_container: settings\ncontainers: [settings, repositories]\n",
  )
  .expect("valid configuration");
  let registry = Registry::from_config(&config);
  println!("Containers: {:?}", registry.container_names());

  registry.default_container().bind_value("page_size", 25usize);
  registry
    .container("repositories")
    .bind_value("users", vec!["alice", "bob", "carol"]);

  let summary = registry.inject_in(
    summarize,
    InjectOptions::new().containers(["repositories", "settings"]),
  );
  let result = summary.call(());

  println!("{} -> {}", summary.name(), result);
  assert_eq!(result, "3 users, page size 25");
}
