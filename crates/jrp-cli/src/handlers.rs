//! Command handlers bridging parsed arguments and the phrase store.

use std::{fmt::Display, path::PathBuf};

use anyhow::{Context, Result};
use jrp_core::{
    display::{OperationStatus, Phrases},
    Clock, Outcome, Phrase, PhraseStore, SystemClock,
};
use log::debug;
use serde::Serialize;

use crate::{
    cli::{
        ClearArgs, FavoriteCommands, HistoryCommands, IdsArgs, RemoveArgs, SaveArgs, SearchArgs,
        ShowArgs,
    },
    renderer::TerminalRenderer,
};

/// Runs one CLI command against the store and prints its result.
pub struct App {
    store: PhraseStore,
    db_path: PathBuf,
    renderer: TerminalRenderer,
    json: bool,
}

impl App {
    pub fn new(store: PhraseStore, db_path: PathBuf, renderer: TerminalRenderer, json: bool) -> Self {
        Self {
            store,
            db_path,
            renderer,
            json,
        }
    }

    pub fn save(&self, args: SaveArgs) -> Result<()> {
        let phrase = args.into_new_phrase(SystemClock.now());
        let result = self.store.save_history(&self.db_path, &[phrase]);
        self.report(result)
    }

    pub fn handle_history_command(&self, command: HistoryCommands) -> Result<()> {
        match command {
            HistoryCommands::Show(args) => self.show_history(args),
            HistoryCommands::Search(args) => self.search_history(args),
            HistoryCommands::Remove(args) => self.remove_history(args),
            HistoryCommands::Clear(args) => self.clear_history(args),
        }
    }

    pub fn handle_favorite_command(&self, command: FavoriteCommands) -> Result<()> {
        match command {
            FavoriteCommands::Add(args) => self.add_favorites(args),
            FavoriteCommands::Remove(args) => self.remove_favorites(args),
            FavoriteCommands::Show(args) => self.show_favorites(args),
            FavoriteCommands::Search(args) => self.search_favorites(args),
            FavoriteCommands::Clear => self.clear_favorites(),
        }
    }

    pub fn show_history(&self, args: ShowArgs) -> Result<()> {
        let phrases = if args.all {
            self.store.get_all_history(&self.db_path)
        } else {
            self.store.get_history_with_number(&self.db_path, args.number)
        }
        .context("Failed to read history")?;
        self.list(phrases)
    }

    fn search_history(&self, args: SearchArgs) -> Result<()> {
        let SearchArgs { keywords, and, show } = args;
        let phrases = if show.all {
            self.store.search_all_history(&self.db_path, &keywords, and)
        } else {
            self.store
                .search_history_with_number(&self.db_path, show.number, &keywords, and)
        }
        .context("Failed to search history")?;
        self.list(phrases)
    }

    fn remove_history(&self, args: RemoveArgs) -> Result<()> {
        let result = self
            .store
            .remove_history_by_ids(&self.db_path, &args.ids.ids, args.force);
        self.report(result)
    }

    fn clear_history(&self, args: ClearArgs) -> Result<()> {
        let result = self.store.remove_history_all(&self.db_path, args.force);
        self.report(result)
    }

    fn add_favorites(&self, args: IdsArgs) -> Result<()> {
        let result = self.store.add_favorite_by_ids(&self.db_path, &args.ids);
        self.report(result)
    }

    fn remove_favorites(&self, args: IdsArgs) -> Result<()> {
        let result = self.store.remove_favorite_by_ids(&self.db_path, &args.ids);
        self.report(result)
    }

    fn show_favorites(&self, args: ShowArgs) -> Result<()> {
        let phrases = if args.all {
            self.store.get_all_favorite(&self.db_path)
        } else {
            self.store.get_favorite_with_number(&self.db_path, args.number)
        }
        .context("Failed to read favorites")?;
        self.list(phrases)
    }

    fn search_favorites(&self, args: SearchArgs) -> Result<()> {
        let SearchArgs { keywords, and, show } = args;
        let phrases = if show.all {
            self.store.search_all_favorite(&self.db_path, &keywords, and)
        } else {
            self.store
                .search_favorite_with_number(&self.db_path, show.number, &keywords, and)
        }
        .context("Failed to search favorites")?;
        self.list(phrases)
    }

    fn clear_favorites(&self) -> Result<()> {
        let result = self.store.remove_favorite_all(&self.db_path);
        self.report(result)
    }

    fn list(&self, phrases: Vec<Phrase>) -> Result<()> {
        debug!("Listing {} phrases", phrases.len());
        let phrases = Phrases(phrases);
        if self.json {
            let json = phrases.to_json().context("Failed to serialize phrases")?;
            println!("{json}");
            return Ok(());
        }
        self.renderer.render(&phrases.to_string())
    }

    /// Prints the status of a mutation. A failed operation becomes an error
    /// whose context is the failure message, so the process exits non-zero.
    fn report<S>(&self, result: jrp_core::Result<S>) -> Result<()>
    where
        S: Outcome + Display + Serialize,
    {
        let status = result.with_context(|| S::FAILED.to_string())?;
        if self.json {
            let json = serde_json::to_string_pretty(&StatusReport { status })
                .context("Failed to serialize status")?;
            println!("{json}");
            return Ok(());
        }
        self.renderer
            .render(&OperationStatus::from_outcome(status).to_string())
    }
}

#[derive(Serialize)]
struct StatusReport<S> {
    status: S,
}
