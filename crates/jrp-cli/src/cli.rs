//! Command-line argument wrappers using clap.
//!
//! Each wrapper keeps clap attributes out of the core crate and converts
//! into the plain values the [`jrp_core::PhraseStore`] operations take.

use clap::{Args, Subcommand};
use jiff::Zoned;
use jrp_core::NewPhrase;

/// Number of phrases listed when `--number` is not given.
pub const DEFAULT_NUMBER: i64 = 10;

/// Save a phrase
#[derive(Args)]
pub struct SaveArgs {
    /// The phrase text
    #[arg(allow_hyphen_values = true)]
    pub phrase: String,
    /// Text to show before the phrase
    #[arg(short, long, allow_hyphen_values = true)]
    pub prefix: Option<String>,
    /// Text to show after the phrase
    #[arg(short, long, allow_hyphen_values = true)]
    pub suffix: Option<String>,
}

impl SaveArgs {
    /// Converts the arguments into an unsaved phrase stamped with `now`.
    pub fn into_new_phrase(self, now: Zoned) -> NewPhrase {
        NewPhrase::new(self.phrase, self.prefix, self.suffix, now)
    }
}

/// Choose how many phrases to list
#[derive(Args, Clone, Copy)]
pub struct ShowArgs {
    /// Number of most recent phrases to show
    #[arg(short, long, default_value_t = DEFAULT_NUMBER, allow_negative_numbers = true)]
    pub number: i64,
    /// Show every phrase instead of the most recent ones
    #[arg(short, long, conflicts_with = "number")]
    pub all: bool,
}

impl Default for ShowArgs {
    fn default() -> Self {
        Self {
            number: DEFAULT_NUMBER,
            all: false,
        }
    }
}

/// Search phrases by keywords
#[derive(Args)]
pub struct SearchArgs {
    /// Keywords the phrase must contain
    pub keywords: Vec<String>,
    /// Require every keyword instead of any of them
    #[arg(long, help = "Match phrases containing every keyword (default: any)")]
    pub and: bool,
    #[command(flatten)]
    pub show: ShowArgs,
}

/// Select phrases by id
#[derive(Args)]
pub struct IdsArgs {
    /// Ids of the phrases
    #[arg(help = "Ids of the phrases (as shown by `history show`)")]
    pub ids: Vec<u64>,
}

/// Remove phrases from the history
#[derive(Args)]
pub struct RemoveArgs {
    #[command(flatten)]
    pub ids: IdsArgs,
    /// Also remove favorited phrases
    #[arg(long)]
    pub force: bool,
}

/// Remove every phrase from the history
#[derive(Args)]
pub struct ClearArgs {
    /// Also remove favorited phrases
    #[arg(long)]
    pub force: bool,
}

#[derive(Subcommand)]
pub enum HistoryCommands {
    /// Show the most recent phrases
    #[command(aliases = ["l", "ls"])]
    Show(ShowArgs),
    /// Search phrases by keywords
    #[command(alias = "f")]
    Search(SearchArgs),
    /// Remove phrases by id
    #[command(aliases = ["d", "rm"])]
    Remove(RemoveArgs),
    /// Remove every phrase
    Clear(ClearArgs),
}

#[derive(Subcommand)]
pub enum FavoriteCommands {
    /// Mark phrases as favorites
    #[command(alias = "a")]
    Add(IdsArgs),
    /// Unmark favorite phrases
    #[command(aliases = ["d", "rm"])]
    Remove(IdsArgs),
    /// Show the most recent favorites
    #[command(aliases = ["l", "ls"])]
    Show(ShowArgs),
    /// Search favorites by keywords
    #[command(alias = "f")]
    Search(SearchArgs),
    /// Unmark every favorite
    Clear,
}
