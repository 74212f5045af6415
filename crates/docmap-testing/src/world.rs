//! TestWorld pattern for declarative integration test setup.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures::SampleFiles;

/// Isolated data directory plus the settings every CLI run gets.
///
/// # Example
/// ```no_run
/// use docmap_testing::TestWorld;
/// use assert_cmd::cargo::cargo_bin_cmd;
///
/// let world = TestWorld::new().with_samples();
/// let mut cmd = cargo_bin_cmd!("docmap");
/// world.configure_command(&mut cmd).arg("clusters");
/// assert!(cmd.output().unwrap().status.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    env_vars: HashMap<String, String>,
    samples: SampleFiles,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create an empty, isolated data directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("data");
        fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            data_dir,
            env_vars: HashMap::new(),
            samples: SampleFiles::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Install the full sample data set.
    pub fn with_samples(self) -> Self {
        self.samples
            .install(&self.data_dir)
            .expect("Failed to install samples");
        self
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Write (or overwrite) a file relative to the data directory.
    pub fn write_file(&self, relative: &str, content: &str) -> Result<PathBuf> {
        let path = self.data_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
        Ok(path)
    }

    pub fn remove_file(&self, relative: &str) -> Result<()> {
        fs::remove_file(self.data_dir.join(relative))?;
        Ok(())
    }

    /// Configure a CLI command with this environment's settings.
    ///
    /// The caller provides the base command (`cargo_bin_cmd!("docmap")`).
    /// Logs go to a file inside the world so stderr only carries
    /// user-facing output.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir")
            .arg(&self.data_dir)
            .arg("--log-file")
            .arg(self.log_file());

        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("RUST_LOG");
        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    pub fn log_file(&self) -> PathBuf {
        self.temp_dir.path().join("docmap.log")
    }

    /// Contents of the diagnostic log written so far.
    pub fn log_contents(&self) -> String {
        fs::read_to_string(self.log_file()).unwrap_or_default()
    }
}
