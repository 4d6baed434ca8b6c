//! # Process Wiring
//!
//! Everything the shell needs before the first menu is drawn: arguments,
//! the settings file, logging and the starting catalog.

use super::print::print_messages;
use super::setup::Cli;
use super::shell::Shell;
use clap::Parser;
use console::Term;
use directories::ProjectDirs;
use shelf::api::{CmdMessage, ShelfApi};
use shelf::catalog::{seed_demo_books, Catalog};
use shelf::config::{ShelfConfig, CONFIG_FILENAME};
use shelf::error::Result;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn, Level};
use tracing_subscriber::FmtSubscriber;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_path = cli.config.clone().or_else(default_config_path);
    let (mut config, notice) = match &config_path {
        Some(path) => load_config(path),
        None => (ShelfConfig::default(), None),
    };
    apply_overrides(&mut config, &cli);
    debug!(?config_path, ?config, "settings loaded");

    let terminal = Term::stdout().is_term();
    if !config.color || !terminal {
        colored::control::set_override(false);
    }

    let mut catalog = Catalog::new();
    if config.seed_demo_books {
        seed_demo_books(&mut catalog);
    }
    let mut api = ShelfApi::new(catalog);

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    if let Some(notice) = notice {
        print_messages(&mut stdout, &[notice])?;
    }
    Shell::new(&mut api, config, config_path, stdin.lock(), stdout)
        .with_terminal(terminal)
        .run()
}

/// A settings file that cannot be read leaves the defaults in place and
/// yields a warning for the user instead of ending the session.
fn load_config(path: &Path) -> (ShelfConfig, Option<CmdMessage>) {
    match ShelfConfig::load(path) {
        Ok(config) => (config, None),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "settings file ignored");
            let notice = CmdMessage::warning(format!(
                "Ignoring settings in {} ({}); using defaults.",
                path.display(),
                e
            ));
            (ShelfConfig::default(), Some(notice))
        }
    }
}

/// Command-line flags win over the settings file for this session only.
fn apply_overrides(config: &mut ShelfConfig, cli: &Cli) {
    if let Some(size) = cli.page_size {
        config.page_size = size as usize;
    }
    if cli.no_color {
        config.color = false;
    }
    if cli.no_clear {
        config.clear_screen = false;
    }
    if cli.demo {
        config.seed_demo_books = true;
    }
}

fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "shelf", "shelf").map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Logs go to stderr so they never mix with the menus.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    // A subscriber may already be installed when embedded; keep it.
    let _ = tracing::subscriber::set_global_default(subscriber);
}
