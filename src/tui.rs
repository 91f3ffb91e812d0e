use std::io;
use std::panic;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::CrosstermBackend;

/// Type alias for the terminal used throughout the app.
pub type Terminal = ratatui::Terminal<CrosstermBackend<io::Stdout>>;

/// Initialise the terminal: enter raw mode + alternate screen.
pub fn init() -> Result<Terminal> {
    install_panic_hook();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = ratatui::Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to its original state.
pub fn restore() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Leave raw mode before the default hook prints, so the panic message is readable.
fn install_panic_hook() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = restore();
        tracing::error!(%info, "panic");
        default_hook(info);
    }));
}
