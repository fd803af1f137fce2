//! Error types for the phrase store.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for all phrase store operations.
#[derive(Error, Debug)]
pub enum JrpError {
    /// Database open, bootstrap, statement or conversion errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> JrpError {
        JrpError::Database {
            message: self.message,
            source,
        }
    }
}

impl JrpError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Returns the underlying engine error, if this is a database error.
    pub fn engine_error(&self) -> Option<&rusqlite::Error> {
        match self {
            JrpError::Database { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| JrpError::database(message).with_source(e))
    }
}

/// Result type alias for phrase store operations
pub type Result<T> = std::result::Result<T, JrpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_context_keeps_engine_error() {
        let result: std::result::Result<(), rusqlite::Error> =
            Err(rusqlite::Error::InvalidQuery);
        let err = result.db_context("Failed to insert phrase").unwrap_err();

        assert_eq!(err.to_string(), "Database error: Failed to insert phrase");
        assert!(matches!(
            err.engine_error(),
            Some(rusqlite::Error::InvalidQuery)
        ));
    }

    #[test]
    fn test_engine_error_absent_for_other_variants() {
        let err = JrpError::XdgDirectory("no home".to_string());
        assert!(err.engine_error().is_none());
        assert_eq!(err.to_string(), "XDG directory error: no home");
    }
}
