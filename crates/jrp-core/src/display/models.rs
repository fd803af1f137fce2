//! Display implementations for domain models.
//!
//! Phrases render as one markdown list item each; status enums render as
//! the short sentence printed after a mutation.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{AddStatus, Phrase, RemoveStatus, SaveStatus};

impl fmt::Display for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- **{}** {}", self.id, self.decorated())?;
        if self.is_favorited {
            write!(f, " ★")?;
        }
        writeln!(f, " *({})*", LocalDateTime(&self.created_at))
    }
}

impl fmt::Display for SaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            SaveStatus::SavedNone => "No phrases to save",
            SaveStatus::SavedSuccessfully => "Saved successfully",
            SaveStatus::SavedNotAll => "Some phrases were not saved",
            SaveStatus::SavedFailed => "Failed to save phrases",
        };
        f.write_str(message)
    }
}

impl fmt::Display for AddStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            AddStatus::AddedNone => "No phrases were added to favorites",
            AddStatus::AddedSuccessfully => "Added to favorites successfully",
            AddStatus::AddedNotAll => "Some phrases were not added to favorites",
            AddStatus::AddedFailed => "Failed to add favorites",
        };
        f.write_str(message)
    }
}

impl fmt::Display for RemoveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            RemoveStatus::RemovedNone => "Nothing was removed",
            RemoveStatus::RemovedSuccessfully => "Removed successfully",
            RemoveStatus::RemovedNotAll => "Some entries were not removed",
            RemoveStatus::RemovedFailed => "Failed to remove",
        };
        f.write_str(message)
    }
}

#[cfg(test)]
mod tests {
    use jiff::{Timestamp, tz::TimeZone};

    use super::*;

    fn phrase(is_favorited: bool) -> Phrase {
        let at = Timestamp::from_second(1640995200)
            .unwrap()
            .to_zoned(TimeZone::UTC);
        Phrase {
            id: 3,
            phrase: "test1".to_string(),
            prefix: Some("> ".to_string()),
            suffix: None,
            is_favorited,
            created_at: at.clone(),
            updated_at: at,
        }
    }

    #[test]
    fn test_phrase_display() {
        assert_eq!(
            phrase(false).to_string(),
            "- **3** > test1 *(2022-01-01 00:00:00 UTC)*\n"
        );
        assert!(phrase(true).to_string().contains("test1 ★"));
    }

    #[test]
    fn test_status_display() {
        assert_eq!(SaveStatus::SavedSuccessfully.to_string(), "Saved successfully");
        assert_eq!(AddStatus::AddedNone.to_string(), "No phrases were added to favorites");
        assert_eq!(RemoveStatus::RemovedNotAll.to_string(), "Some entries were not removed");
    }
}
