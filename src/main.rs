mod app;
mod cli;
mod clipboard;
mod color;
mod event;
mod logging;
mod tui;
mod ui;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli_opts = cli::Cli::parse();
    let _log_guard = match logging::init(&logging::default_log_dir()) {
        Ok(guard) => Some(guard),
        Err(err) => {
            eprintln!("logging disabled: {err:#}");
            None
        }
    };

    if let Some(command) = cli_opts.command {
        return cli::run(command, cli_opts.mode);
    }

    tracing::info!(mode = %cli_opts.mode, "starting interactive view");
    let mut app = app::App::new(
        cli_opts.mode,
        Box::new(color::RandomSource),
        clipboard::ClipboardWriter::system(),
    );
    let mut guard = tui::TerminalGuard::enter()?;
    event::run(&mut app, &mut guard.terminal)
}
