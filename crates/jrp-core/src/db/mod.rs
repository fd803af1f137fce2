//! Database operations and SQLite management for the phrase history.
//!
//! This module provides the low-level query executors of the phrase store.
//! A [`Database`] wraps one SQLite connection; opening it runs the schema
//! bootstrap so every query module can assume the `jrp` table exists.
//! Status classification and result shaping live one level up, in
//! [`crate::store`].

use std::path::Path;

use log::debug;
use rusqlite::{Connection, Transaction};

use crate::error::{DatabaseResultExt, Result};

pub mod favorite_queries;
pub mod read_queries;
pub mod remove_queries;
pub mod save_queries;
pub mod schema;

pub use read_queries::PhraseFilter;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens (creating if needed) the database file and bootstraps the
    /// schema.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Rolls back a transaction on a failure path. A rollback error is
    /// logged and dropped so the caller can return the statement error.
    fn rollback_quietly(tx: Transaction<'_>) {
        if let Err(e) = tx.rollback() {
            debug!("Ignoring rollback failure: {e}");
        }
    }
}
