//! Database path discovery.

use std::path::{Path, PathBuf};

use crate::error::{JrpError, Result};

/// Directory name used under the XDG data home.
pub const APP_NAME: &str = "jrp";

/// File name of the phrase database.
pub const DATABASE_FILE_NAME: &str = "jrp.db";

/// Returns the default database path following the XDG Base Directory
/// specification: `$XDG_DATA_HOME/jrp/jrp.db` or
/// `~/.local/share/jrp/jrp.db`. The parent directory is created.
pub fn default_database_path() -> Result<PathBuf> {
    xdg::BaseDirectories::with_prefix(APP_NAME)
        .place_data_file(DATABASE_FILE_NAME)
        .map_err(|e| JrpError::XdgDirectory(e.to_string()))
}

/// Creates the parent directory of `path` if it is missing.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| JrpError::FileSystem {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    Ok(())
}

/// Resolves an explicit path, or falls back to the default one.
pub fn resolve_database_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    match explicit {
        Some(path) => {
            ensure_parent_dir(&path)?;
            Ok(path)
        }
        None => default_database_path(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_parent_dir_creates_nested_directories() {
        let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("a").join("b").join(DATABASE_FILE_NAME);

        ensure_parent_dir(&path).expect("Failed to create parent");
        assert!(path.parent().unwrap().is_dir());
    }

    #[test]
    fn test_ensure_parent_dir_accepts_bare_file_name() {
        ensure_parent_dir(Path::new(DATABASE_FILE_NAME)).expect("Bare file name has no parent");
    }

    #[test]
    fn test_resolve_explicit_path_is_kept() {
        let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("nested").join("custom.db");

        let resolved = resolve_database_path(Some(path.clone())).expect("Failed to resolve");
        assert_eq!(resolved, path);
        assert!(temp_dir.path().join("nested").is_dir());
    }

    #[test]
    fn test_ensure_parent_dir_reports_file_system_error() {
        let temp_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        let path = temp_file.path().join("child").join(DATABASE_FILE_NAME);

        let err = ensure_parent_dir(&path).unwrap_err();
        assert!(matches!(err, JrpError::FileSystem { .. }));
    }
}
