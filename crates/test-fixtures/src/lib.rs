//! Test fixture loader for golden graphs and cascade scenarios.
//!
//! Graphs are stored as JSON node/edge listings under `graphs/`; scenarios
//! with known outcomes under `scenarios/`. Callers deserialize graphs into
//! whatever snapshot type they use.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root directory of the fixture files.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON text.
pub fn load_fixture_text(relative_path: &str) -> String {
    let path = fixtures_root().join(relative_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut paths: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    paths.sort();
    paths
}

/// A cascade run with a known result. Only meaningful for probabilities
/// of 0 or 1, where the outcome does not depend on the random source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CascadeScenario {
    pub name: String,
    /// Graph fixture path, relative to the fixtures root.
    pub graph: String,
    pub seeds: Vec<String>,
    pub probability: f64,
    /// Influenced nodes in activation order.
    pub expected_influenced: Vec<String>,
    /// Activated edges in activation order.
    pub expected_edges: Vec<String>,
    /// Nodes that must never be influenced.
    pub excluded: Vec<String>,
    pub expected_rounds: usize,
}

/// Load every scenario from `scenarios/cascades.json`.
pub fn load_scenarios() -> Vec<CascadeScenario> {
    load_fixture("scenarios/cascades.json")
}
