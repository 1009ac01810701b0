use std::fs;
use std::path::Path;

/// Load a captured tool stdout fixture by name
pub fn load_json_fixture(fixture_name: &str) -> String {
    let path = Path::new("src/tests/fixtures").join(format!("{}.json", fixture_name));
    fs::read_to_string(path)
        .unwrap_or_else(|_| panic!("Failed to load test fixture: {}", fixture_name))
}
