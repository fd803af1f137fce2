//! Schema bootstrap.

use log::debug;

use crate::error::{DatabaseResultExt, Result};

/// Name of the phrase table, also used as its key in `sqlite_sequence`.
pub const TABLE_NAME: &str = "jrp";

const SCHEMA_SQL: &str = include_str!("../../assets/schema.sql");

impl super::Database {
    /// Creates the phrase table if it does not exist yet. Safe to run on
    /// every connection.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        self.connection
            .execute_batch(SCHEMA_SQL)
            .db_context("Failed to initialize database schema")?;

        debug!("Schema bootstrap completed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;

    #[test]
    fn test_bootstrap_is_idempotent() {
        let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("jrp.db");

        let db = Database::open(&path).expect("Failed to open database");
        db.initialize_schema().expect("Second bootstrap should succeed");
        drop(db);
        Database::open(&path).expect("Reopening should succeed");
    }

    #[test]
    fn test_bootstrap_creates_expected_columns() {
        let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let db = Database::open(temp_dir.path().join("jrp.db")).expect("Failed to open database");

        let mut stmt = db
            .connection
            .prepare(&format!("SELECT name FROM pragma_table_info('{TABLE_NAME}')"))
            .expect("Failed to prepare pragma query");
        let columns: Vec<String> = stmt
            .query_map([], |row| row.get(0))
            .expect("Failed to query columns")
            .collect::<std::result::Result<_, _>>()
            .expect("Failed to read columns");

        assert_eq!(
            columns,
            vec![
                "id",
                "phrase",
                "prefix",
                "suffix",
                "is_favorited",
                "created_at",
                "updated_at"
            ]
        );
    }
}
