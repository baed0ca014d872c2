//! Test helpers for writing datasets and pages into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Food venues in dataset order, in the guide's JSON record shape.
pub(super) const FOOD_DATASET: &str = r#"[
    {"Place": "Majestic Café", "Venue": "café", "Latitude": 41.1472, "Longitude": -8.6069,
     "Address": "R. de Santa Catarina 112", "Tags": ["Historic", "Coffee"], "Price": "€€"},
    {"Place": "Aduela", "Venue": "Wine Bar", "Latitude": 41.1489, "Longitude": -8.6159},
    {"Place": "Zé Bota", "Venue": "restaurant", "Latitude": 41.1467, "Longitude": -8.6154},
    {"Place": "Café Santiago", "Venue": "café", "Latitude": 41.1466, "Longitude": -8.6063,
     "Specialty": "Francesinha"},
    {"Place": "Cantinho do Avillez", "Venue": "Restaurant", "Latitude": 41.1449,
     "Longitude": -8.6112}
]"#;

/// Shops near the lodging.
pub(super) const ESSENTIALS_DATASET: &str = r#"[
    {"Place": "Pingo Doce", "Venue": "Supermarket", "Latitude": 41.1487, "Longitude": -8.6076},
    {"Place": "Farmácia Estácio", "Venue": "Pharmacy", "Latitude": 41.1481, "Longitude": -8.6098}
]"#;

pub(super) const INDEX_PAGE: &str =
    "<html><head><title>Porto Map</title></head><body><div id=\"root\"></div></body></html>";

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write test file");
}

/// Temporary directory with a UTF-8 root.
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

    /// Write `contents` to `name` and return its path.
    pub(super) fn file(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.path(name);
        write_utf8(&path, contents.as_bytes());
        path
    }
}
