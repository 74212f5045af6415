//! TUI renderer for the explore command
//!
//! Owns the terminal for the lifetime of the session. Input events go to
//! `ExplorerApp`; the effects it returns are handed to the `Fetcher`, whose
//! results come back over the channel and are drained once per tick.

use std::io;
use std::sync::mpsc::Receiver;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use docmap_engine::UiEvent;
use docmap_runtime::Fetcher;
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;

use crate::presentation::tui::ExplorerApp;

pub struct TuiRenderer {
    app: ExplorerApp,
}

impl TuiRenderer {
    pub fn new(app: ExplorerApp) -> Self {
        Self { app }
    }

    pub fn run(mut self, fetcher: Fetcher, rx: Receiver<UiEvent>) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            std::process::exit(0);
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal, &fetcher, &rx);

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        info!("explorer closed");
        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        fetcher: &Fetcher,
        rx: &Receiver<UiEvent>,
    ) -> Result<()> {
        fetcher.spawn_all(self.app.start());

        loop {
            terminal.draw(|f| self.app.render(f))?;

            // Timeout keeps fetch results flowing without input
            if event::poll(Duration::from_millis(100))? {
                let effects = match event::read()? {
                    Event::Key(key) => self.app.handle_key(key),
                    Event::Mouse(mouse) => self.app.handle_mouse(mouse),
                    _ => Vec::new(),
                };
                fetcher.spawn_all(effects);
            }

            while let Ok(ui_event) = rx.try_recv() {
                let effects = self.app.on_event(ui_event);
                fetcher.spawn_all(effects);
            }

            if self.app.should_quit() {
                break;
            }
        }

        Ok(())
    }
}
