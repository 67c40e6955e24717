//! Fixture checking behind the `searchapi-check` binary.

use std::fs;
use std::path::{Path, PathBuf};

use searchapi_core::{Error, Result, Shape};
use serde_json::Value;

/// Outcome of checking one file: canonical JSON or the reason it was rejected.
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub result: Result<Value>,
}

impl FileOutcome {
    pub fn is_ok(&self) -> bool { self.result.is_ok() }
}

/// Where fixtures for `shape` live when no path is given: the per-shape
/// folder `<fixtures_dir>/<ShapeName>` if present, else `fixtures_dir` itself.
pub fn default_target(shape: Shape, fixtures_dir: &Path) -> PathBuf {
    let per_shape = fixtures_dir.join(shape.name());
    if per_shape.is_dir() { per_shape } else { fixtures_dir.to_path_buf() }
}

/// Check a single file, or every `*.json` file under a directory (sorted by path).
pub fn check_path(shape: Shape, path: &Path) -> Result<Vec<FileOutcome>> {
    let files = if path.is_dir() { list_json_files(path) } else { vec![path.to_path_buf()] };
    tracing::info!(shape = %shape, files = files.len(), root = %path.display(), "checking fixtures");

    let mut outcomes = Vec::with_capacity(files.len());
    for file in files {
        let result = fs::read_to_string(&file)
            .map_err(Error::from)
            .and_then(|contents| shape.check(&contents));
        if let Err(e) = &result {
            tracing::warn!(file = %file.display(), error = %e, "fixture rejected");
        }
        outcomes.push(FileOutcome { path: file, result });
    }
    Ok(outcomes)
}

fn list_json_files(root: &Path) -> Vec<PathBuf> {
    let mut json_files: Vec<PathBuf> = walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| p.extension().and_then(|s| s.to_str()) == Some("json"))
        .collect();
    json_files.sort();
    json_files
}
