use fibre_inject::{
  get_container, global, set_default_container, Registry, RegistryConfig, DEFAULT_CONTAINER_NAME,
};
use pretty_assertions::assert_eq;
use serial_test::serial;
use std::sync::Arc;

#[test]
fn test_get_container_is_idempotent() {
  let first = get_container(Some("registry_idempotent"));
  let second = get_container(Some("registry_idempotent"));

  assert!(Arc::ptr_eq(&first, &second));
  assert!(global().contains_container("registry_idempotent"));
}

/// Puts the global default container name back when dropped, so a failing
/// assertion cannot leak a changed default into other tests.
struct RestoreDefault(String);

impl Drop for RestoreDefault {
  fn drop(&mut self) {
    set_default_container(self.0.clone());
  }
}

#[test]
#[serial]
fn test_set_default_container_redirects_unnamed_lookups() {
  let _restore = RestoreDefault(global().default_container_name());

  set_default_container("registry_x");
  let container = get_container(None);
  assert_eq!(container.name(), "registry_x");
  assert!(Arc::ptr_eq(&container, &get_container(Some("registry_x"))));
}

#[test]
#[serial]
fn test_default_container_name_starts_as_default() {
  assert_eq!(global().default_container_name(), DEFAULT_CONTAINER_NAME);
}

#[test]
fn test_registry_from_config() {
  let config = RegistryConfig::from_yaml_str(
    "default_container: app\ncontainers:\n  - app\n  - repositories\n",
  )
  .unwrap();
  let registry = Registry::from_config(&config);

  assert_eq!(registry.default_container_name(), "app");
  assert_eq!(registry.container_names(), vec!["app", "repositories"]);
  assert_eq!(registry.default_container().name(), "app");
}

#[test]
fn test_owned_registries_are_independent() {
  let first = Registry::new();
  let second = Registry::new();

  first.default_container().bind_value("only_in_first", true);

  assert!(first.default_container().contains("only_in_first"));
  assert!(!second.default_container().contains("only_in_first"));
}
