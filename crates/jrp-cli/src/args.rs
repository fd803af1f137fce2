use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{FavoriteCommands, HistoryCommands, SaveArgs};

/// Command-line access to the jrp phrase history
///
/// Saved phrases can be listed, searched, marked as favorites and removed.
/// Favorited phrases are protected from removal unless `--force` is given.
#[derive(Parser)]
#[command(version, about, name = "jrp")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/jrp/jrp.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print phrase lists as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the jrp CLI
///
/// Without a command, the latest phrases of the history are shown.
#[derive(Subcommand)]
pub enum Commands {
    /// Save a phrase to the history
    #[command(alias = "s")]
    Save(SaveArgs),
    /// Browse and manage the phrase history
    #[command(alias = "h")]
    History {
        #[command(subcommand)]
        command: HistoryCommands,
    },
    /// Browse and manage favorited phrases
    #[command(alias = "f")]
    Favorite {
        #[command(subcommand)]
        command: FavoriteCommands,
    },
}
