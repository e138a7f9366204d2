//! Fixture loading from YAML files

use serde::Deserialize;
use std::path::Path;

/// A single test case from a fixture file
#[derive(Debug, Clone, Deserialize)]
pub struct TestCase {
    pub id: String,
    #[allow(dead_code)]
    pub desc: String,
    pub css: String,
    /// Expected `[property, value]` pairs, in order
    pub decls: Vec<(String, String)>,
    /// Optional `[start_line, start_col, end_line, end_col]` per declaration
    #[serde(default)]
    pub ranges: Option<Vec<[usize; 4]>>,
    /// Input ends on a clean boundary, so text appended after a newline
    /// scans independently of it.
    #[serde(default)]
    pub sealed: bool,
}

/// Load all test cases from a YAML fixture file
pub fn load_fixtures(path: &Path) -> Vec<TestCase> {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read fixture file {:?}: {}", path, e));
    serde_yaml::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture file {:?}: {}", path, e))
}

/// Load fixtures from the standard fixtures directory
pub fn load_fixtures_by_name(name: &str) -> Vec<TestCase> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(format!("{}.yaml", name));
    load_fixtures(&path)
}
