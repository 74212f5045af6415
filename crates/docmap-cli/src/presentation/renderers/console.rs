use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;

use super::traits::Renderer;
use crate::presentation::view_models::CommandResultViewModel;
use crate::presentation::views::{CreateView, DisplayOptions};
use crate::types::OutputFormat;

pub struct ConsoleRenderer {
    json_mode: bool,
    enable_color: bool,
}

impl ConsoleRenderer {
    pub fn new(json_mode: bool) -> Self {
        Self {
            json_mode,
            enable_color: std::io::stdout().is_terminal(),
        }
    }

    pub fn for_format(format: OutputFormat) -> Self {
        Self::new(format == OutputFormat::Json)
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView + Send + Sync,
    {
        if self.json_mode {
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }

        let options = DisplayOptions {
            enable_color: self.enable_color,
        };
        print!("{}", result.content.create_view(options));

        if !result.suggestions.is_empty() {
            if self.enable_color {
                eprintln!("\n{}", "Notes:".yellow().bold());
            } else {
                eprintln!("\nNotes:");
            }
            for tip in &result.suggestions {
                eprintln!("  - {}", tip.description);
            }
        }

        Ok(())
    }
}
