//! High-level phrase store API.
//!
//! [`PhraseStore`] is the public surface of the crate. It is stateless
//! between calls: every operation takes the database file path, opens a
//! fresh [`Database`] (which bootstraps the schema), performs one logical
//! unit of work and drops the connection on every exit path.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   PhraseStore   │    │ Query executors │    │     SQLite      │
//! │ (history_ops,   │───▶│   (db/*.rs)     │───▶│  (jrp table)    │
//! │  favorite_ops)  │    │                 │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!  status + shaping        one statement set       durable rows
//! ```
//!
//! # Usage
//!
//! ```rust
//! use jrp_core::{NewPhrase, PhraseStore, SaveStatus};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dir = tempfile::TempDir::new()?;
//! let path = dir.path().join("jrp.db");
//! let store = PhraseStore::new();
//!
//! let phrase = NewPhrase::new("眠い猫", None, None, jiff::Zoned::now());
//! let status = store.save_history(&path, &[phrase])?;
//! assert_eq!(status, SaveStatus::SavedSuccessfully);
//!
//! let latest = store.get_history_with_number(&path, 10)?;
//! assert_eq!(latest[0].id, 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use std::path::Path;

use crate::{
    collab::{id_ascending, Clock, Sorter},
    db::{Database, PhraseFilter},
    error::Result,
    models::Phrase,
};

pub mod builder;
pub mod favorite_ops;
pub mod history_ops;


pub use builder::PhraseStoreBuilder;

/// Phrase history store bound to a clock and a sort primitive.
pub struct PhraseStore {
    clock: Box<dyn Clock>,
    sorter: Box<dyn Sorter>,
}

impl PhraseStore {
    /// Creates a store using the system clock and the standard stable sort.
    pub fn new() -> Self {
        PhraseStoreBuilder::new().build()
    }

    pub(crate) fn with_collaborators(clock: Box<dyn Clock>, sorter: Box<dyn Sorter>) -> Self {
        Self { clock, sorter }
    }

    /// Ascending-all shape: every matching row, lowest id first.
    fn read_all(&self, path: &Path, filter: &PhraseFilter<'_>) -> Result<Vec<Phrase>> {
        let db = Database::open(path)?;
        db.select_phrases(filter)
    }

    /// Latest-N-then-ascend shape: the `number` highest-id matching rows,
    /// reordered through the injected sorter.
    fn read_latest(
        &self,
        path: &Path,
        filter: &PhraseFilter<'_>,
        number: i64,
    ) -> Result<Vec<Phrase>> {
        let db = Database::open(path)?;
        if number <= 0 {
            return Ok(Vec::new());
        }

        let mut phrases = db.select_latest_phrases(filter, number)?;
        self.sorter.sort(&mut phrases, id_ascending);
        Ok(phrases)
    }
}

impl Default for PhraseStore {
    fn default() -> Self {
        Self::new()
    }
}
