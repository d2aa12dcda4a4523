//! termfolio console entry point.
//!
//! A portfolio terminal: type `help` for the command list, `clear` to start
//! over, Ctrl-D to quit. An optional TOML file (first argument or
//! `TERMFOLIO_CONFIG`) replaces the built-in profile, theme, and locale.

mod render;
mod session;
mod settings;

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};

use render::{Console, Palette};
use termfolio_terminal::{Interpreter, TranscriptStore};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let path = settings::config_path(
        std::env::args_os().nth(1),
        std::env::var_os(settings::CONFIG_ENV),
    );
    let config = settings::load_config(path.as_deref()).context("failed to load configuration")?;
    let locale = settings::resolve_locale(&config, |var| std::env::var(var).ok())
        .context("invalid locale in configuration")?;
    log::info!("Starting termfolio (date locale {locale:?})");

    let interpreter = Interpreter::with_builtins()
        .with_profile(config.profile)
        .with_locale(locale);
    let mut store = TranscriptStore::new(interpreter);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let interactive = stdin.is_terminal() && stdout.is_terminal();
    let mut console = Console::new(stdout.lock(), Palette::from_theme(&config.theme))
        .with_erase_echoed_input(interactive);

    session::run(&mut store, &mut console, stdin.lock()).context("terminal I/O failed")?;
    log::info!("Session ended with {} transcript entries", store.len());
    Ok(())
}
