use crate::presentation::TuiRenderer;
use crate::presentation::tui::ExplorerApp;
use anyhow::{Result, bail};
use docmap_engine::Explorer;
use docmap_runtime::{Config, DataLoader, Fetcher};
use is_terminal::IsTerminal;
use std::path::Path;
use tracing::info;

pub fn handle(loader: DataLoader, config: &Config, log_file: Option<&Path>) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        bail!(
            "explore needs an interactive terminal; use `docmap clusters` or `docmap points` for printable output"
        );
    }

    let origin = loader.source().describe();
    info!(%origin, "starting explorer");

    let (fetcher, rx) = Fetcher::new(loader);
    let explorer = Explorer::new(config.explorer_options());
    let mut app = ExplorerApp::new(explorer, origin);
    if let Some(path) = log_file {
        app.set_log_hint(path.display().to_string());
    }

    TuiRenderer::new(app).run(fetcher, rx)
}
