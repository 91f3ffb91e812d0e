use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::app::{App, AppEvent};

/// Short enough for the toast fade to be visible.
const TICK_RATE: Duration = Duration::from_millis(100);

/// Waits up to `timeout` for a key press; anything else counts as a tick.
pub fn poll(timeout: Duration) -> Result<AppEvent> {
    if !event::poll(timeout)? {
        return Ok(AppEvent::Tick);
    }
    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(AppEvent::KeyPress(key.code)),
        _ => Ok(AppEvent::Tick),
    }
}

/// Runs the main event loop.
pub fn run(app: &mut App, terminal: &mut crate::tui::Terminal) -> Result<()> {
    tracing::info!(color = %app.color, mode = ?app.copy_mode, "picker started");

    while app.running {
        terminal.draw(|frame| crate::ui::draw(frame, app))?;
        app.update(poll(TICK_RATE)?);
    }

    tracing::info!(color = %app.color, "picker closed");
    Ok(())
}
