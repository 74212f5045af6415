pub mod config;
pub mod error;
pub mod fetcher;
pub mod loader;
pub mod source;

pub use config::{CONFIG_FILE, Config, HighlightConfig, ResourceConfig};
pub use error::{Error, Result};
pub use fetcher::Fetcher;
pub use loader::DataLoader;
pub use source::{DirectorySource, HttpSource, ResourceSource};
