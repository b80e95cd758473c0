#![allow(dead_code)]

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Mutex;

use campus_feed::models::Spreadsheet;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Every variable read by `AppConfig::load`.
pub const CONFIG_VARS: [&str; 9] = [
    "CAMPUS_CONFIG",
    "HOST",
    "PORT",
    "FACULTY_BASE_URL",
    "FACULTY_DEPARTMENTS",
    "SHEETS_BASE_URL",
    "GOOGLE_SHEET_ID",
    "GOOGLE_SHEETS_API_KEY",
    "UPSTREAM_TIMEOUT_SECS",
];

/// Path of a file under `tests/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn load_spreadsheet(name: &str) -> Spreadsheet {
    let content = std::fs::read_to_string(fixture_path(name)).expect("read spreadsheet fixture");
    serde_json::from_str(&content).expect("parse spreadsheet fixture")
}

/// Runs `f` with every config variable cleared and then `changes` applied.
///
/// Access to the process environment is serialized and restored afterwards,
/// even on panic. `Some(v)` sets a variable, `None` removes it.
pub fn with_config_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

    let mut all: Vec<(&str, Option<&str>)> = CONFIG_VARS.iter().map(|k| (*k, None)).collect();
    all.extend_from_slice(changes);
    let _guard = ScopedEnv::new(&all);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}
