mod app;
mod cli;
mod clipboard;
mod color;
mod event;
mod logging;
mod toast;
mod tui;
mod ui;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli_opts = cli::Cli::parse();
    let env_level = std::env::var(logging::LOG_ENV).ok();
    let level = logging::resolve_level(cli_opts.log_level, env_level.as_deref());
    // Logging is best effort; the picker still runs without a log file.
    let _ = logging::init(level);

    if let Some(command) = cli_opts.command {
        return cli::run(command);
    }

    let color = cli_opts.color.unwrap_or_default();
    let clipboard = clipboard::from_kind(cli_opts.clipboard);
    let mut app = app::App::new(color, cli_opts.mode, clipboard);
    let mut terminal = tui::init()?;
    let result = event::run(&mut app, &mut terminal);

    tui::restore()?;

    result
}
