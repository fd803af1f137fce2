//! History-side operations: save, read, search and delete.

use std::path::Path;

use log::debug;

use super::PhraseStore;
use crate::{
    db::{Database, PhraseFilter},
    error::Result,
    models::{NewPhrase, Outcome, Phrase, RemoveStatus, SaveStatus},
};

impl PhraseStore {
    /// Saves the phrases in input order inside one transaction.
    ///
    /// An empty input still bootstraps the database and reports
    /// [`SaveStatus::SavedNone`]. Identical phrases are not deduplicated.
    ///
    /// # Errors
    ///
    /// Returns `JrpError::Database` if the database cannot be opened or any
    /// insert fails; in the latter case the whole batch is rolled back.
    pub fn save_history<P: AsRef<Path>>(
        &self,
        path: P,
        phrases: &[NewPhrase],
    ) -> Result<SaveStatus> {
        let mut db = Database::open(path)?;
        if phrases.is_empty() {
            return Ok(SaveStatus::SavedNone);
        }

        let inserted = db.insert_phrases(phrases)?;
        let status = SaveStatus::from_counts(inserted, phrases.len());
        debug!("save_history: {status:?}");
        Ok(status)
    }

    /// Returns every phrase in ascending id order.
    pub fn get_all_history<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Phrase>> {
        self.read_all(path.as_ref(), &PhraseFilter::history())
    }

    /// Returns the `number` most recent phrases in ascending id order.
    /// A non-positive `number` yields an empty result.
    pub fn get_history_with_number<P: AsRef<Path>>(
        &self,
        path: P,
        number: i64,
    ) -> Result<Vec<Phrase>> {
        self.read_latest(path.as_ref(), &PhraseFilter::history(), number)
    }

    /// Returns every phrase containing all (`and`) or any of the keywords,
    /// in ascending id order. No keywords yields an empty result.
    pub fn search_all_history<P: AsRef<Path>>(
        &self,
        path: P,
        keywords: &[String],
        and: bool,
    ) -> Result<Vec<Phrase>> {
        if keywords.is_empty() {
            Database::open(path)?;
            return Ok(Vec::new());
        }
        let filter = PhraseFilter::history().with_keywords(keywords, and);
        self.read_all(path.as_ref(), &filter)
    }

    /// Latest-N variant of [`PhraseStore::search_all_history`].
    pub fn search_history_with_number<P: AsRef<Path>>(
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
        let filter = PhraseFilter::history().with_keywords(keywords, and);
        self.read_latest(path.as_ref(), &filter, number)
    }

    /// Deletes the given ids one statement at a time.
    ///
    /// Without `force`, favorited phrases are left in place and simply do
    /// not count towards the result. A failure part-way leaves the earlier
    /// deletes committed.
    pub fn remove_history_by_ids<P: AsRef<Path>>(
        &self,
        path: P,
        ids: &[u64],
        force: bool,
    ) -> Result<RemoveStatus> {
        let db = Database::open(path)?;
        if ids.is_empty() {
            return Ok(RemoveStatus::RemovedNone);
        }

        let deleted = db.delete_by_ids(ids, force)?;
        let status = RemoveStatus::from_counts(deleted, ids.len());
        debug!("remove_history_by_ids: {status:?}");
        Ok(status)
    }

    /// Deletes every phrase (`force`) or every unfavorited phrase.
    ///
    /// When the table ends up empty the id sequence is reset, in the same
    /// transaction, so the next saved phrase gets id 1.
    pub fn remove_history_all<P: AsRef<Path>>(&self, path: P, force: bool) -> Result<RemoveStatus> {
        let mut db = Database::open(path)?;
        let deleted = db.purge(force)?;

        let status = if deleted > 0 {
            RemoveStatus::RemovedSuccessfully
        } else {
            RemoveStatus::RemovedNone
        };
        debug!("remove_history_all: {status:?}");
        Ok(status)
    }
}
