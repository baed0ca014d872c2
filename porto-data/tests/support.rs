use camino::{Utf8Path, Utf8PathBuf};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

/// Write `contents` to a temporary `.json` file.
pub fn dataset_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("venues")
        .suffix(".json")
        .tempfile()
        .unwrap_or_else(|err| panic!("failed to create temporary dataset: {err}"));
    file.write_all(contents.as_bytes())
        .unwrap_or_else(|err| panic!("failed to write temporary dataset: {err}"));
    file
}

/// UTF-8 view of a temporary path.
pub fn utf8_path(path: &std::path::Path) -> Utf8PathBuf {
    Utf8Path::from_path(path)
        .unwrap_or_else(|| panic!("temporary path {path:?} is not UTF-8"))
        .to_path_buf()
}

/// Path inside a fresh temporary directory that does not exist.
pub fn missing_path() -> (TempDir, Utf8PathBuf) {
    let dir = tempfile::tempdir().unwrap_or_else(|err| panic!("failed to create temp dir: {err}"));
    let path = utf8_path(dir.path()).join("absent.json");
    (dir, path)
}
