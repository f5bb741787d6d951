//! Terminal setup and teardown
//!
//! Initializes raw mode and the alternate screen, and installs a panic hook
//! that restores the terminal before the panic message is printed.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;

use crate::services::ExpenseService;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the expense form until the user quits
pub fn run_form(service: &ExpenseService, currency: &str) -> Result<()> {
    if service.store().initialize()? {
        log::info!("Created {}", service.store().path().display());
    }

    let mut terminal = init_terminal()?;
    let result = event_loop(&mut terminal, service, currency);
    restore_terminal()?;
    result
}

fn event_loop(terminal: &mut Tui, service: &ExpenseService, currency: &str) -> Result<()> {
    let mut app = App::new(service, currency);
    let events = EventHandler::default();

    while !app.should_quit {
        terminal.draw(|frame| super::views::render(frame, &app))?;
        handle_event(&mut app, events.next()?);
    }

    Ok(())
}
