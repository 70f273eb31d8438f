// Singleton Pattern: one process-wide configuration service, created on
// first use.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use serde_json::{json, Value};
use tracing::info;

use crate::trace::Trace;

pub struct ConfigService {
    values: Mutex<BTreeMap<String, Value>>,
}

impl ConfigService {
    /// The single instance. Initialised on the first call.
    pub fn instance() -> &'static ConfigService {
        static INSTANCE: OnceLock<ConfigService> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            info!("initializing ConfigService");
            let mut values = BTreeMap::new();
            values.insert("apiUrl".to_string(), json!("https://example.com"));
            values.insert("timeout".to_string(), json!(5000));
            values.insert("version".to_string(), json!("1.0.0"));
            info!(keys = values.len(), "ConfigService initialized");
            ConfigService {
                values: Mutex::new(values),
            }
        })
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.values().get(key).cloned()
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<Value>) {
        self.values().insert(key.into(), value.into());
    }

    // The map holds no invariant that a panicking writer could break.
    fn values(&self) -> MutexGuard<'_, BTreeMap<String, Value>> {
        self.values.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn describe(value: Option<Value>) -> String {
    match value {
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
        None => "<unset>".to_string(),
    }
}

pub fn run_demo(trace: &Trace) {
    trace.banner("Singleton Pattern Example");

    let config1 = ConfigService::instance();
    let config2 = ConfigService::instance();

    if std::ptr::eq(config1, config2) {
        trace.line("config1 and config2 are the same instance. Singleton works!");
    } else {
        trace.line("Singleton failed, variables contain different instances.");
    }

    trace.line("");
    trace.line(format!("Initial API URL: {}", describe(config1.get("apiUrl"))));

    config2.set("apiUrl", "https://api.example.com");

    trace.line(format!(
        "New API URL from config1: {}",
        describe(config1.get("apiUrl"))
    ));
}
