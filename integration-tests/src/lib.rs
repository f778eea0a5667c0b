//! Shared fixtures for the end-to-end tests.

use std::{fs, path::PathBuf};

use gridwise_core::Task;

/// Names of every task fixture under `tasks/`.
pub const FIXTURES: [&str; 16] = [
    "rotate",
    "shift",
    "replace",
    "recolor",
    "scale",
    "tile",
    "pad",
    "crop",
    "count",
    "subsample",
    "last_row",
    "mirror",
    "frame",
    "fill",
    "unsolvable",
    "overfit",
];

/// Loads the fixture `name` from `tasks/<name>.json`, using `name` as the task id.
///
/// # Panics
///
/// Panics if the fixture is missing or malformed.
#[must_use]
pub fn load(name: &str) -> Task {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tasks")
        .join(format!("{name}.json"));
    let json = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()));
    let task: Task =
        serde_json::from_str(&json).unwrap_or_else(|e| panic!("invalid task {name}: {e}"));
    task.with_id(name)
}
