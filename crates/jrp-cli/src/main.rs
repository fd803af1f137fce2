//! jrp CLI Application
//!
//! Command-line interface for saving, browsing and favoriting phrases.

mod args;
mod cli;
mod handlers;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use handlers::App;
use jrp_core::{paths, PhraseStore};
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        json,
        command,
    } = Args::parse();

    let db_path =
        paths::resolve_database_path(database_file).context("Failed to resolve database path")?;

    info!("jrp started with database {}", db_path.display());

    let app = App::new(
        PhraseStore::new(),
        db_path,
        TerminalRenderer::new(!no_color),
        json,
    );

    match command {
        Some(Save(args)) => app.save(args),
        Some(History { command }) => app.handle_history_command(command),
        Some(Favorite { command }) => app.handle_favorite_command(command),
        None => app.show_history(Default::default()),
    }
}
