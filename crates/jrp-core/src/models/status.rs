//! Outcome enumerations for store mutations.
//!
//! Every mutating operation returns `Result<Status>`. A successful call
//! carries one of the non-failure variants; the `…Failed` variant is what an
//! `Err` classifies to through [`Outcome::status_of`].

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Common behaviour of the status families.
pub trait Outcome: Copy + Sized {
    /// The variant reported when the operation failed.
    const FAILED: Self;

    /// Classifies an operation result into its status code.
    fn status_of(result: &Result<Self>) -> Self {
        match result {
            Ok(status) => *status,
            Err(_) => Self::FAILED,
        }
    }

    /// Classifies an aggregated `rows_affected` count against the number of
    /// requested rows.
    fn from_counts(affected: usize, requested: usize) -> Self;

    /// Whether this status denotes a failed operation.
    fn is_failure(&self) -> bool;
}

/// Outcome of saving phrases.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SaveStatus {
    /// Nothing was requested
    SavedNone,
    /// Every requested phrase was saved
    SavedSuccessfully,
    /// Fewer rows than requested were inserted
    SavedNotAll,
    /// The save failed and was rolled back
    SavedFailed,
}

impl Outcome for SaveStatus {
    const FAILED: Self = SaveStatus::SavedFailed;

    /// Saving never reports `SavedNone` for a non-empty request: zero
    /// inserted rows is still a partial save.
    fn from_counts(affected: usize, requested: usize) -> Self {
        if requested == 0 {
            SaveStatus::SavedNone
        } else if affected == requested {
            SaveStatus::SavedSuccessfully
        } else {
            SaveStatus::SavedNotAll
        }
    }

    fn is_failure(&self) -> bool {
        matches!(self, SaveStatus::SavedFailed)
    }
}

/// Outcome of marking phrases as favorites.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AddStatus {
    /// Nothing was requested or nothing changed
    AddedNone,
    /// Every requested phrase was marked
    AddedSuccessfully,
    /// Some, but not all, requested phrases were marked
    AddedNotAll,
    /// A statement failed
    AddedFailed,
}

impl Outcome for AddStatus {
    const FAILED: Self = AddStatus::AddedFailed;

    fn from_counts(affected: usize, requested: usize) -> Self {
        if affected == 0 {
            AddStatus::AddedNone
        } else if affected == requested {
            AddStatus::AddedSuccessfully
        } else {
            AddStatus::AddedNotAll
        }
    }

    fn is_failure(&self) -> bool {
        matches!(self, AddStatus::AddedFailed)
    }
}

/// Outcome of removing phrases or favorite marks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RemoveStatus {
    /// Nothing was requested or nothing matched
    RemovedNone,
    /// Every requested row was removed
    RemovedSuccessfully,
    /// Some, but not all, requested rows were removed
    RemovedNotAll,
    /// A statement failed
    RemovedFailed,
}

impl Outcome for RemoveStatus {
    const FAILED: Self = RemoveStatus::RemovedFailed;

    fn from_counts(affected: usize, requested: usize) -> Self {
        if affected == 0 {
            RemoveStatus::RemovedNone
        } else if affected == requested {
            RemoveStatus::RemovedSuccessfully
        } else {
            RemoveStatus::RemovedNotAll
        }
    }

    fn is_failure(&self) -> bool {
        matches!(self, RemoveStatus::RemovedFailed)
    }
}
