//! Dataset fixtures for CLI tests.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// A small Gujarat dataset: one operational storage terminal, one planned
/// plant, one solar park and one high-priority port.
pub(super) const SAMPLE_DATASET: &str = r#"{
  "assets": [
    { "name": "Dahej Storage Terminal", "latitude": 21.7294, "longitude": 72.6642,
      "type": "storage", "status": "operational" },
    { "name": "Mundra Hydrogen Hub", "latitude": 22.746, "longitude": 69.7,
      "type": "plant", "status": "planned" }
  ],
  "renewables": [
    { "name": "Charanka Solar Park", "latitude": 23.908, "longitude": 71.216, "type": "solar" }
  ],
  "demandCenters": [
    { "name": "Deendayal Port Authority", "latitude": 23.017, "longitude": 70.217,
      "annualDemand": 15000, "priority": "high" }
  ]
}"#;

/// Temporary workspace holding dataset files.
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

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Write `contents` to `name` and return its path.
    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.root.join(name);
        std::fs::write(path.as_std_path(), contents).expect("write dataset");
        path
    }

    pub(super) fn sample_dataset(&self) -> Utf8PathBuf {
        self.write("dataset.json", SAMPLE_DATASET)
    }
}

/// Decode captured command output.
pub(super) fn output_json(buffer: &[u8]) -> serde_json::Value {
    serde_json::from_slice(buffer).expect("command output is JSON")
}
