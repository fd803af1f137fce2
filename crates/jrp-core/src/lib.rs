//! Storage core for the jrp phrase history.
//!
//! This crate owns the on-disk representation of saved phrases: a single
//! SQLite file holding the `jrp` table, the favorite flag of each phrase and
//! the monotonically increasing id sequence. It exposes a small synchronous
//! API, [`PhraseStore`], whose operations each open a fresh connection,
//! bootstrap the schema and run one logical unit of work.
//!
//! Mutations report an outcome category ([`SaveStatus`], [`AddStatus`],
//! [`RemoveStatus`]) so callers can tell "nothing to do", "complete
//! success" and "partial success" apart; failures are returned as
//! [`JrpError`] and classify to the `…Failed` variant through
//! [`Outcome::status_of`].
//!
//! # Quick Start
//!
//! ```rust
//! use jrp_core::{NewPhrase, Outcome, PhraseStore, RemoveStatus};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dir = tempfile::TempDir::new()?;
//! let path = dir.path().join("jrp.db");
//! let store = PhraseStore::new();
//!
//! let now = jiff::Zoned::now();
//! store.save_history(&path, &[
//!     NewPhrase::new("test1", None, None, now.clone()),
//!     NewPhrase::new("test2", None, None, now),
//! ])?;
//!
//! store.add_favorite_by_ids(&path, &[1])?;
//!
//! // Favorited phrases survive a non-forced delete.
//! let result = store.remove_history_by_ids(&path, &[1, 2], false);
//! assert_eq!(RemoveStatus::status_of(&result), RemoveStatus::RemovedNotAll);
//!
//! let keywords = vec!["test".to_string()];
//! let found = store.search_all_history(&path, &keywords, false)?;
//! assert_eq!(found.len(), 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod collab;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod paths;
pub mod store;

// Re-export commonly used types
pub use collab::{Clock, Sorter, StableSorter, SystemClock};
pub use db::Database;
pub use display::{LocalDateTime, OperationStatus, Phrases};
pub use error::{JrpError, Result};
pub use models::{AddStatus, NewPhrase, Outcome, Phrase, RemoveStatus, SaveStatus};
pub use store::{PhraseStore, PhraseStoreBuilder};
