use crate::Result;
use docmap_engine::{ExplorerOptions, ScatterConfig};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File name looked up in the data directory when no config path is given
pub const CONFIG_FILE: &str = "docmap.toml";

/// Where the three kinds of resource live, relative to the source root
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResourceConfig {
    pub cluster_set: String,
    pub points: String,
    /// Prepended verbatim to a document id to form its content path
    pub content_prefix: String,
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            cluster_set: "clustering_results.json".to_string(),
            points: "mds_data1.json".to_string(),
            content_prefix: "dataset/".to_string(),
        }
    }
}

impl ResourceConfig {
    pub fn content_path(&self, id: &str) -> String {
        format!("{}{}", self.content_prefix, id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub restore_selection_on_unhover: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub resources: ResourceConfig,
    #[serde(default)]
    pub scatterplot: ScatterConfig,
    #[serde(default)]
    pub highlight: HighlightConfig,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn default_path(data_dir: &Path) -> PathBuf {
        data_dir.join(CONFIG_FILE)
    }

    pub fn explorer_options(&self) -> ExplorerOptions {
        ExplorerOptions {
            scatter: self.scatterplot.clone(),
            restore_selection_on_unhover: self.highlight.restore_selection_on_unhover,
        }
    }
}
