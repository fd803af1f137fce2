#![allow(dead_code)]

use std::path::{Path, PathBuf};

use jiff::{Timestamp, Zoned, tz::TimeZone};
use jrp_core::{NewPhrase, Phrase, PhraseStore, SaveStatus};
use tempfile::TempDir;

/// Helper function to create a test store and a database path in a fresh
/// temporary directory
pub fn create_test_store() -> (TempDir, PathBuf, PhraseStore) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("jrp.db");
    (temp_dir, db_path, PhraseStore::new())
}

/// Fixed timestamp used for saved phrases (2022-01-01 00:00:00 UTC)
pub fn fixed_time() -> Zoned {
    Timestamp::from_second(1640995200)
        .unwrap()
        .to_zoned(TimeZone::UTC)
}

/// Builds a phrase with empty prefix and suffix, like the generator does
pub fn new_phrase(text: &str) -> NewPhrase {
    NewPhrase::new(text, Some(String::new()), Some(String::new()), fixed_time())
}

/// Saves the given texts and asserts the batch was fully written
pub fn save_texts(store: &PhraseStore, path: &Path, texts: &[&str]) {
    let phrases: Vec<NewPhrase> = texts.iter().map(|t| new_phrase(t)).collect();
    let status = store
        .save_history(path, &phrases)
        .expect("Failed to save phrases");
    assert_eq!(status, SaveStatus::SavedSuccessfully);
}

pub fn ids(phrases: &[Phrase]) -> Vec<u64> {
    phrases.iter().map(|p| p.id).collect()
}

pub fn texts(phrases: &[Phrase]) -> Vec<&str> {
    phrases.iter().map(|p| p.phrase.as_str()).collect()
}

pub fn keywords(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

/// Runs raw SQL against the database through a side connection. Used to
/// install triggers that inject engine failures.
pub fn execute_raw(path: &Path, sql: &str) {
    let conn = rusqlite::Connection::open(path).expect("Failed to open side connection");
    conn.execute_batch(sql).expect("Failed to execute raw SQL");
}

/// Reads the current `sqlite_sequence` value for the phrase table.
pub fn sequence_value(path: &Path) -> Option<i64> {
    let conn = rusqlite::Connection::open(path).expect("Failed to open side connection");
    conn.query_row(
        "SELECT seq FROM sqlite_sequence WHERE name = 'jrp'",
        [],
        |row| row.get(0),
    )
    .ok()
}
