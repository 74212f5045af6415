use super::args::{Cli, Commands};
use super::handlers::{self, HandlerContext};
use crate::logging;
use anyhow::Result;
use docmap_runtime::{Config, DataLoader, DirectorySource, HttpSource, ResourceSource};
use std::path::PathBuf;
use tracing::{debug, info};

pub fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or(Commands::Explore);

    let log_file: Option<PathBuf> = match (&cli.log_file, &command) {
        (Some(path), _) => Some(path.clone()),
        (None, Commands::Explore) => Some(logging::default_tui_log_path()),
        (None, _) => None,
    };
    logging::init(cli.log_level, log_file.as_deref())?;

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| Config::default_path(&cli.data_dir));
    let config = Config::load_from(&config_path)?;
    debug!(path = %config_path.display(), exists = config_path.exists(), "config loaded");

    let source: Box<dyn ResourceSource> = match &cli.base_url {
        Some(url) => Box::new(HttpSource::new(url.clone())),
        None => Box::new(DirectorySource::new(&cli.data_dir)),
    };
    info!(origin = %source.describe(), "resource source selected");
    let loader = DataLoader::new(source, config.resources.clone());

    let ctx = HandlerContext::new(cli.format);

    match command {
        Commands::Explore => handlers::explore::handle(loader, &config, log_file.as_deref()),
        Commands::Clusters => handlers::clusters::handle(&loader, &ctx),
        Commands::Points => handlers::points::handle(&loader, &config, &ctx),
        Commands::Show { file } => handlers::show::handle(&loader, &ctx, file),
    }
}
