use crate::types::{LogLevel, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "docmap")]
#[command(about = "Explore document clustering results in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding the cluster set, points and dataset/
    #[arg(long, default_value = ".", global = true)]
    pub data_dir: PathBuf,

    /// Fetch resources over HTTP from this base URL instead of --data-dir
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Config file (default: <data-dir>/docmap.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    /// Overridden by RUST_LOG when set
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Diagnostic log destination (default: stderr, or a temp file for explore)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive explorer (default)
    Explore,

    /// Print the cluster list
    Clusters,

    /// Print every plotted document with data and plot coordinates
    Points,

    /// Print the text of one document
    Show {
        /// Document file name, as listed in the cluster set
        file: String,
    },
}
