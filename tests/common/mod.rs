use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Write `contents` to `name` inside a fresh temporary directory.
pub fn write_fixture(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("Failed to write fixture");
    (dir, path)
}

pub const STATES_CSV: &str = "\
State,Income_Norm,Unemployment_Norm,Cost_Norm
Minnesota,0.82,0.25,0.55
Mississippi,0.10,0.72,0.12
California,0.90,0.68,0.95
Utah,0.80,0.20,0.30
Ohio,0.50,0.50,0.50
";

pub const COUNTIES_CSV: &str = "\
County,Income_Norm,Unemployment_Norm,Cost_Norm
Adams,0.60,0.40,0.50
Baker,0.60,0.40,0.50
Clark,0.90,0.10,0.20
Dodge,,0.30,0.30
Essex,0.20,0.80,0.90
";
