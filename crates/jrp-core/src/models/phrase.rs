//! Phrase model definitions.

use jiff::Zoned;
use serde::{Deserialize, Serialize};

/// A phrase persisted in the history table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Phrase {
    /// Identifier assigned by the store on insert
    pub id: u64,

    /// The phrase text itself (may be empty)
    pub phrase: String,

    /// Optional text shown before the phrase
    pub prefix: Option<String>,

    /// Optional text shown after the phrase
    pub suffix: Option<String>,

    /// Whether the phrase is marked as a favorite
    #[serde(default)]
    pub is_favorited: bool,

    /// Timestamp supplied by the caller when the phrase was saved
    pub created_at: Zoned,

    /// Timestamp of the last favorite toggle (or of creation)
    pub updated_at: Zoned,
}

/// A phrase that has not been saved yet.
///
/// The store assigns the id and the favorite flag starts cleared; the
/// timestamps are persisted exactly as given.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewPhrase {
    pub phrase: String,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub created_at: Zoned,
    pub updated_at: Zoned,
}

impl NewPhrase {
    /// Creates a new phrase whose creation and update timestamps are both
    /// `now`.
    pub fn new(
        phrase: impl Into<String>,
        prefix: Option<String>,
        suffix: Option<String>,
        now: Zoned,
    ) -> Self {
        Self {
            phrase: phrase.into(),
            prefix,
            suffix,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

impl Phrase {
    /// Returns the phrase text decorated with its prefix and suffix.
    pub fn decorated(&self) -> String {
        format!(
            "{}{}{}",
            self.prefix.as_deref().unwrap_or_default(),
            self.phrase,
            self.suffix.as_deref().unwrap_or_default()
        )
    }
}
