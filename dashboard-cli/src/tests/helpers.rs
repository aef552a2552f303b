//! Test helpers for preparing request files and catalog databases.

use camino::{Utf8Path, Utf8PathBuf};
use dashboard_core::test_support::sample_catalog;
use dashboard_core::{NumericAttribute, write_catalog};
use serde_json::{Map, Value, json};
use tempfile::TempDir;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write test file");
}

/// A temporary directory holding request files and a catalog database.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    /// Write `payload` as JSON to `name` and return its path.
    pub(super) fn write_json(&self, name: &str, payload: &Value) -> Utf8PathBuf {
        let path = self.path(name);
        let bytes = serde_json::to_vec_pretty(payload).expect("serialise payload");
        write_utf8(&path, &bytes);
        path
    }

    /// Persist the three-model sample catalog and return the database path.
    pub(super) fn seed_catalog(&self) -> Utf8PathBuf {
        let path = self.path("catalog.db");
        write_catalog(path.as_std_path(), sample_catalog().records()).expect("seed catalog");
        path
    }
}

/// A recommendation payload weighting only `attr`, requiring `services`.
pub(super) fn recommend_payload(attr: NumericAttribute, services: &[&str]) -> Value {
    let mut payload = Map::new();
    payload.insert("Service".to_owned(), json!(services));
    for each in NumericAttribute::ALL {
        let weight = if each == attr { 1.0 } else { 0.0 };
        payload.insert(each.as_str().to_owned(), json!(weight));
    }
    Value::Object(payload)
}

/// Decode captured stdout as a JSON value.
pub(super) fn stdout_json(stdout: &[u8]) -> Value {
    serde_json::from_slice(stdout).expect("output should be JSON")
}

/// Extract the `Name` of each entry in a `{ "result": [...] }` envelope.
pub(super) fn result_names(output: &Value) -> Vec<String> {
    output["result"]
        .as_array()
        .expect("result array")
        .iter()
        .filter_map(|entry| entry["Name"].as_str().map(str::to_owned))
        .collect()
}
