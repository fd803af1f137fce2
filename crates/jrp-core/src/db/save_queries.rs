//! Phrase inserts.

use log::debug;
use rusqlite::{params, Transaction};

use crate::{
    error::{DatabaseResultExt, Result},
    models::NewPhrase,
};

const INSERT_PHRASE_SQL: &str =
    "INSERT INTO jrp (phrase, prefix, suffix, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5)";

impl super::Database {
    /// Inserts every phrase inside one transaction and returns the summed
    /// `rows_affected`.
    ///
    /// The transaction is committed whenever every statement succeeds, even
    /// if fewer rows than requested were actually written. Any statement
    /// failure rolls back the whole batch.
    pub fn insert_phrases(&mut self, phrases: &[NewPhrase]) -> Result<usize> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let inserted = match Self::insert_each(&tx, phrases) {
            Ok(inserted) => inserted,
            Err(e) => {
                Self::rollback_quietly(tx);
                return Err(e);
            }
        };

        tx.commit().db_context("Failed to commit transaction")?;

        debug!("Inserted {inserted} of {} phrases", phrases.len());
        Ok(inserted)
    }

    fn insert_each(tx: &Transaction<'_>, phrases: &[NewPhrase]) -> Result<usize> {
        let mut stmt = tx
            .prepare(INSERT_PHRASE_SQL)
            .db_context("Failed to prepare insert")?;

        let mut inserted = 0;
        for phrase in phrases {
            inserted += stmt
                .execute(params![
                    phrase.phrase,
                    phrase.prefix,
                    phrase.suffix,
                    phrase.created_at.to_string(),
                    phrase.updated_at.to_string(),
                ])
                .db_context("Failed to insert phrase")?;
        }

        Ok(inserted)
    }
}
