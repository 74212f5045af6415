//! Sample data placement.
//!
//! The samples describe three clusters (`C3` empty), three plotted
//! documents and their text under `dataset/`.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const CLUSTER_SET: &str = "clustering_results.json";
pub const POINTS: &str = "mds_data1.json";
pub const DOCUMENTS: [&str; 3] = ["a.txt", "b.txt", "c.txt"];

/// Sample file manager for test data.
pub struct SampleFiles {
    samples_dir: PathBuf,
}

impl Default for SampleFiles {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleFiles {
    /// Samples live in `crates/docmap-testing/samples/`.
    pub fn new() -> Self {
        Self {
            samples_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("samples"),
        }
    }

    pub fn path(&self, sample_name: &str) -> PathBuf {
        self.samples_dir.join(sample_name)
    }

    pub fn read(&self, sample_name: &str) -> Result<String> {
        let path = self.path(sample_name);
        fs::read_to_string(&path).with_context(|| format!("Missing sample {}", path.display()))
    }

    /// Copy one sample, keeping its relative path under `root`.
    pub fn copy_to(&self, sample_name: &str, root: &Path) -> Result<()> {
        let dest = root.join(sample_name);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(self.path(sample_name), &dest)
            .with_context(|| format!("Failed to copy sample {}", sample_name))?;
        Ok(())
    }

    /// Cluster set, points and every document.
    pub fn install(&self, root: &Path) -> Result<()> {
        self.copy_to(CLUSTER_SET, root)?;
        self.copy_to(POINTS, root)?;
        for doc in DOCUMENTS {
            self.copy_to(&format!("dataset/{}", doc), root)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_parse_as_json() {
        let samples = SampleFiles::new();
        let clusters: serde_json::Value =
            serde_json::from_str(&samples.read(CLUSTER_SET).unwrap()).unwrap();
        let points: serde_json::Value =
            serde_json::from_str(&samples.read(POINTS).unwrap()).unwrap();

        assert_eq!(clusters.as_object().unwrap().len(), 3);
        assert_eq!(points.as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_install_places_documents_under_dataset() {
        let dir = tempfile::TempDir::new().unwrap();
        SampleFiles::new().install(dir.path()).unwrap();

        assert!(dir.path().join(CLUSTER_SET).is_file());
        assert!(dir.path().join("dataset/c.txt").is_file());
    }
}
