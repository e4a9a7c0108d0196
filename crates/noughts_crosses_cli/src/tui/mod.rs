//! Terminal board view.
//!
//! Reads game state through [`App`] and dispatches key presses back to it;
//! no rule knowledge lives here.

mod app;
mod board;
mod input;

pub use app::App;

use crate::config::AppConfig;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use tracing::{info, instrument};

/// Runs the terminal UI until the user quits.
///
/// The terminal is restored even when drawing or input fails.
#[instrument(skip_all)]
pub fn run(config: &AppConfig) -> anyhow::Result<()> {
    info!("Starting terminal UI");
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, config);
    ratatui::restore();
    info!("Terminal UI closed");
    result
}

fn event_loop(terminal: &mut DefaultTerminal, config: &AppConfig) -> anyhow::Result<()> {
    let mut app = App::new();
    while !app.should_quit() {
        terminal.draw(|f| board::render(f, &app, config))?;
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }
    }
    Ok(())
}
