//! Phrase deletes and id sequence reseeding.

use log::debug;
use rusqlite::{params, Transaction};

use super::schema::TABLE_NAME;
use crate::error::{DatabaseResultExt, Result};

const DELETE_BY_ID_SQL: &str = "DELETE FROM jrp WHERE id = ?1";
const DELETE_UNFAVORITED_BY_ID_SQL: &str = "DELETE FROM jrp WHERE id = ?1 AND is_favorited = 0";
const DELETE_ALL_SQL: &str = "DELETE FROM jrp";
const DELETE_ALL_UNFAVORITED_SQL: &str = "DELETE FROM jrp WHERE is_favorited = 0";
const COUNT_PHRASES_SQL: &str = "SELECT COUNT(*) FROM jrp";
const RESET_SEQUENCE_SQL: &str = "DELETE FROM sqlite_sequence WHERE name = ?1";

impl super::Database {
    /// Deletes each id, in order, and returns the summed `rows_affected`.
    ///
    /// Without `force`, favorited rows are excluded by the predicate. Each
    /// id is an autonomous statement, so a failure leaves earlier deletes in
    /// place. Ids beyond the engine's integer range are skipped.
    pub fn delete_by_ids(&self, ids: &[u64], force: bool) -> Result<usize> {
        let sql = if force {
            DELETE_BY_ID_SQL
        } else {
            DELETE_UNFAVORITED_BY_ID_SQL
        };
        let mut stmt = self
            .connection
            .prepare(sql)
            .db_context("Failed to prepare delete")?;

        let mut deleted = 0;
        for &id in ids {
            let Ok(row_id) = i64::try_from(id) else {
                debug!("Skipping out of range id {id}");
                continue;
            };
            match stmt.execute(params![row_id]) {
                Ok(rows) => deleted += rows,
                Err(e) => {
                    debug!("Delete stopped at id {id} after {deleted} rows");
                    return Err(e).db_context("Failed to delete phrase");
                }
            }
        }

        Ok(deleted)
    }

    /// Deletes every row (`force`) or every unfavorited row inside one
    /// transaction. When the table ends up empty the id sequence is reset in
    /// the same transaction so the next insert gets id 1. Returns the number
    /// of deleted rows.
    pub fn purge(&mut self, force: bool) -> Result<usize> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let deleted = match Self::purge_within(&tx, force) {
            Ok(deleted) => deleted,
            Err(e) => {
                Self::rollback_quietly(tx);
                return Err(e);
            }
        };

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(deleted)
    }

    fn purge_within(tx: &Transaction<'_>, force: bool) -> Result<usize> {
        let rows_before = Self::count_within(tx)?;
        if rows_before == 0 {
            return Ok(0);
        }

        let sql = if force {
            DELETE_ALL_SQL
        } else {
            DELETE_ALL_UNFAVORITED_SQL
        };
        let deleted = tx.execute(sql, []).db_context("Failed to delete phrases")?;

        debug!("Purge deleted {deleted} of {rows_before} rows");

        if Self::count_within(tx)? == 0 {
            tx.execute(RESET_SEQUENCE_SQL, params![TABLE_NAME])
                .db_context("Failed to reset id sequence")?;
            debug!("Id sequence reset");
        }

        Ok(deleted)
    }

    fn count_within(tx: &Transaction<'_>) -> Result<usize> {
        let count: i64 = tx
            .query_row(COUNT_PHRASES_SQL, [], |row| row.get(0))
            .db_context("Failed to count phrases")?;
        Ok(count as usize)
    }
}
