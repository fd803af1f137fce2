//! Favorite-side operations.
//!
//! Reads mirror the history side with the result restricted to favorited
//! phrases. Toggles refresh `updated_at` from the store's clock.

use std::path::Path;

use log::debug;

use super::PhraseStore;
use crate::{
    db::{Database, PhraseFilter},
    error::Result,
    models::{AddStatus, Outcome, Phrase, RemoveStatus},
};

impl PhraseStore {
    /// Returns every favorited phrase in ascending id order.
    pub fn get_all_favorite<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Phrase>> {
        self.read_all(path.as_ref(), &PhraseFilter::favorites())
    }

    /// Returns the `number` most recent favorited phrases in ascending id
    /// order.
    pub fn get_favorite_with_number<P: AsRef<Path>>(
        &self,
        path: P,
        number: i64,
    ) -> Result<Vec<Phrase>> {
        self.read_latest(path.as_ref(), &PhraseFilter::favorites(), number)
    }

    /// Favorite counterpart of
    /// [`search_all_history`](PhraseStore::search_all_history).
    pub fn search_all_favorite<P: AsRef<Path>>(
        &self,
        path: P,
        keywords: &[String],
        and: bool,
    ) -> Result<Vec<Phrase>> {
        if keywords.is_empty() {
            Database::open(path)?;
            return Ok(Vec::new());
        }
        let filter = PhraseFilter::favorites().with_keywords(keywords, and);
        self.read_all(path.as_ref(), &filter)
    }

    /// Searches favorites and keeps the `number` most recent matches,
    /// returned in ascending id order.
    pub fn search_favorite_with_number<P: AsRef<Path>>(
        &self,
        path: P,
        number: i64,
        keywords: &[String],
        and: bool,
    ) -> Result<Vec<Phrase>> {
        if keywords.is_empty() {
            Database::open(path)?;
            return Ok(Vec::new());
        }
        let filter = PhraseFilter::favorites().with_keywords(keywords, and);
        self.read_latest(path.as_ref(), &filter, number)
    }

    /// Marks the given ids as favorites, one statement per id.
    ///
    /// Ids that are missing or already favorited do not count. A failure
    /// part-way leaves the earlier ids marked.
    pub fn add_favorite_by_ids<P: AsRef<Path>>(&self, path: P, ids: &[u64]) -> Result<AddStatus> {
        let db = Database::open(path)?;
        if ids.is_empty() {
            return Ok(AddStatus::AddedNone);
        }

        let updated = db.set_favorite_by_ids(ids, true, &self.clock.now())?;
        let status = AddStatus::from_counts(updated, ids.len());
        debug!("add_favorite_by_ids: {status:?}");
        Ok(status)
    }

    /// Clears the favorite mark of the given ids, one statement per id.
    pub fn remove_favorite_by_ids<P: AsRef<Path>>(
        &self,
        path: P,
        ids: &[u64],
    ) -> Result<RemoveStatus> {
        let db = Database::open(path)?;
        if ids.is_empty() {
            return Ok(RemoveStatus::RemovedNone);
        }

        let updated = db.set_favorite_by_ids(ids, false, &self.clock.now())?;
        let status = RemoveStatus::from_counts(updated, ids.len());
        debug!("remove_favorite_by_ids: {status:?}");
        Ok(status)
    }

    /// Clears every favorite mark in one transaction. Rows are kept.
    pub fn remove_favorite_all<P: AsRef<Path>>(&self, path: P) -> Result<RemoveStatus> {
        let mut db = Database::open(path)?;
        let cleared = db.clear_favorites(&self.clock.now())?;

        let status = if cleared > 0 {
            RemoveStatus::RemovedSuccessfully
        } else {
            RemoveStatus::RemovedNone
        };
        debug!("remove_favorite_all: {status:?}");
        Ok(status)
    }
}
