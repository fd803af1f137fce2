//! Favorite flag updates.

use jiff::Zoned;
use log::debug;
use rusqlite::{params, Transaction};

use crate::error::{DatabaseResultExt, Result};

const UPDATE_FAVORITE_BY_ID_SQL: &str =
    "UPDATE jrp SET is_favorited = ?1, updated_at = ?2 WHERE id = ?3 AND is_favorited = ?4";
const CLEAR_FAVORITES_SQL: &str =
    "UPDATE jrp SET is_favorited = 0, updated_at = ?1 WHERE is_favorited = 1";

impl super::Database {
    /// Sets the favorite flag of each id, in order, and returns the summed
    /// `rows_affected`.
    ///
    /// Only rows whose flag differs from `favorited` are touched, and their
    /// `updated_at` is set to `now`. Each id is an autonomous statement: if
    /// one fails, the rows updated before it stay updated. Ids beyond the
    /// engine's integer range cannot exist and are skipped.
    pub fn set_favorite_by_ids(&self, ids: &[u64], favorited: bool, now: &Zoned) -> Result<usize> {
        let mut stmt = self
            .connection
            .prepare(UPDATE_FAVORITE_BY_ID_SQL)
            .db_context("Failed to prepare favorite update")?;

        let now_str = now.to_string();
        let mut updated = 0;
        for &id in ids {
            let Ok(row_id) = i64::try_from(id) else {
                debug!("Skipping out of range id {id}");
                continue;
            };
            match stmt.execute(params![favorited, &now_str, row_id, !favorited]) {
                Ok(rows) => updated += rows,
                Err(e) => {
                    debug!("Favorite update stopped at id {id} after {updated} rows");
                    return Err(e).db_context("Failed to update favorite");
                }
            }
        }

        Ok(updated)
    }

    /// Clears the favorite flag on every favorited row inside a transaction
    /// and returns how many rows changed.
    pub fn clear_favorites(&mut self, now: &Zoned) -> Result<usize> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let cleared = match Self::clear_each(&tx, now) {
            Ok(cleared) => cleared,
            Err(e) => {
                Self::rollback_quietly(tx);
                return Err(e);
            }
        };

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(cleared)
    }

    fn clear_each(tx: &Transaction<'_>, now: &Zoned) -> Result<usize> {
        tx.execute(CLEAR_FAVORITES_SQL, params![now.to_string()])
            .db_context("Failed to clear favorites")
    }
}
