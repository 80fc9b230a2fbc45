//! Volstage - terminal showcase for a stream volume control
//!
//! Binary entry point for the TUI application.

use std::time::Instant;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

use volstage::app::App;
use volstage::config::Config;
use volstage::logging;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::load()?;
    let _log_guard = logging::init(&config.log_dir)?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting volstage");

    let terminal = ratatui::init();
    // Restore the terminal even if the loop panics
    let _restore = scopeguard::guard((), |_| ratatui::restore());
    run(terminal, config)
}

/// Run the application's main loop.
fn run(mut terminal: DefaultTerminal, config: Config) -> color_eyre::Result<()> {
    let mut app = App::new(config);

    while app.running {
        terminal.draw(|frame| app.render(frame))?;
        handle_events(&mut app)?;
    }

    tracing::info!("exiting");
    Ok(())
}

/// Handle crossterm events.
///
/// Polls until the next tick is due, then ticks whether or not a key
/// arrived, so held keys do not stall the simulated backends.
fn handle_events(app: &mut App) -> color_eyre::Result<()> {
    if event::poll(app.until_next_tick(Instant::now()))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.on_key_event(key);
            }
            _ => {}
        }
    }
    app.tick_if_due(Instant::now());
    Ok(())
}
