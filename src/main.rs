//! shoplist - Terminal Shopping List
//!
//! A single-screen shopping list: add items through a dialog, edit them in
//! place, delete them. The list lives in memory only.

use std::io;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tracing::{error, info};

use shoplist::application::App;
use shoplist::infrastructure::{init_logging, load_config};
use shoplist::presentation::{list_viewport_rows, render_ui, InputHandler};

/// Entry point for the shopping list application.
///
/// Loads the configuration, sets up logging and the terminal, and runs the
/// event loop until the user quits.
///
/// # Errors
///
/// Returns an error if the configuration file is malformed or if terminal
/// setup fails.
fn main() -> Result<()> {
    let config = load_config()?;

    match init_logging(&config.logging) {
        Ok(Some(path)) => info!(event = "app.started", log_file = %path.display()),
        Ok(None) => {}
        Err(e) => eprintln!("Logging disabled: {e:#}"),
    }

    // Restore the terminal before the default hook prints the panic.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let res = run_app(&mut terminal, &mut app);

    restore_terminal()?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(event = "app.crashed", error = %err);
        eprintln!("Error: {err}");
        std::process::exit(1);
    }

    info!(event = "app.exited", items = app.store.len());
    Ok(())
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Main application event loop.
///
/// Handles terminal rendering and keyboard input processing. Each key press
/// is handled to completion before the next one is read.
///
/// # Errors
///
/// Returns an IO error if terminal operations fail.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        let size = terminal.size()?;
        app.update_viewport_size(list_viewport_rows(size.height));
        terminal.draw(|f| render_ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                InputHandler::handle_key_event(app, key.code, key.modifiers);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
