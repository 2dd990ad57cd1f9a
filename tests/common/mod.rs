use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
pub struct FixtureCase {
    pub name: String,
    pub input: String,
    pub expected: String,
    /// Lowest acceptable [`similarity`]; exact match when absent.
    #[serde(default = "exact")]
    pub min_score: f64,
}

fn exact() -> f64 {
    100.0
}

pub fn load_cases(file: &str) -> Vec<FixtureCase> {
    let path: PathBuf = [env!("CARGO_MANIFEST_DIR"), "tests", "fixtures", file]
        .iter()
        .collect();
    let raw = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()));
    serde_json::from_str(&raw).unwrap_or_else(|e| panic!("bad fixture {file}: {e}"))
}

/// Share of positions holding the same word, as a percentage of the longer
/// text's word count.
pub fn similarity(expected: &str, actual: &str) -> f64 {
    if expected == actual {
        return 100.0;
    }
    let expected: Vec<&str> = expected.split_whitespace().collect();
    let actual: Vec<&str> = actual.split_whitespace().collect();
    if expected.is_empty() {
        return if actual.is_empty() { 100.0 } else { 0.0 };
    }
    let matches = expected
        .iter()
        .zip(&actual)
        .filter(|(e, a)| e == a)
        .count();
    matches as f64 / expected.len().max(actual.len()) as f64 * 100.0
}
