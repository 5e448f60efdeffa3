use fibre_inject::{get_container, resolve, Arguments, Injectable, Result};
use std::sync::Arc;

// 1. Define the abstraction (the trait)
trait Logger: Send + Sync {
  fn log(&self, message: &str);
}

// 2. Define concrete implementations
struct ConsoleLogger;
impl Logger for ConsoleLogger {
  fn log(&self, message: &str) {
    println!("[CONSOLE LOG]: {}", message);
  }
}

struct PrefixLogger(&'static str);
impl Logger for PrefixLogger {
  fn log(&self, message: &str) {
    println!("[{}]: {}", self.0, message);
  }
}

// 3. Define a service that depends on the abstraction, by name
struct ReportService {
  logger: Arc<Arc<dyn Logger>>,
}

impl ReportService {
  fn generate_report(&self) {
    self.logger.log("Starting report generation.");
    // ... logic to generate report ...
    self.logger.log("Finished report generation.");
  }
}

impl Injectable for ReportService {
  fn constructor_dependencies() -> &'static [&'static str] {
    &["logger"]
  }

  fn construct(args: Arguments) -> Result<Self> {
    Ok(ReportService {
      logger: args.required::<Arc<dyn Logger>>(0)?,
    })
  }
}

fn main() {
  // --- Registration ---
  // Trait objects are bound as `Arc<dyn Logger>` values and resolved with that type.
  let reports = get_container(Some("reports"));
  reports
    .bind_value("logger", Arc::new(ConsoleLogger) as Arc<dyn Logger>)
    .bind_class::<ReportService>();

  // A second container picks a different implementation for the same name.
  let audits = get_container(Some("audits"));
  audits
    .bind_value("logger", Arc::new(PrefixLogger("AUDIT")) as Arc<dyn Logger>)
    .bind_class::<ReportService>();

  // --- Resolution and Usage ---
  println!("Resolving the report service from both containers...");
  let report_service = resolve!(ReportService, "ReportService", from "reports");
  let audit_service = resolve!(ReportService, "ReportService", from "audits");

  report_service.generate_report();
  audit_service.generate_report();
}
