//! Collection wrapper types for displaying groups of phrases.

use std::fmt;

use crate::{error::Result, models::Phrase};

/// Newtype wrapper for displaying a list of phrases.
///
/// Handles empty collections gracefully.
///
/// # Examples
///
/// ```rust
/// use jrp_core::{display::Phrases, models::Phrase};
/// use jiff::Zoned;
///
/// let phrase = Phrase {
///     id: 1,
///     phrase: "test1".to_string(),
///     prefix: None,
///     suffix: None,
///     is_favorited: false,
///     created_at: Zoned::now(),
///     updated_at: Zoned::now(),
/// };
/// let output = format!("{}", Phrases(vec![phrase]));
/// assert!(output.contains("test1"));
/// ```
pub struct Phrases(pub Vec<Phrase>);

impl Phrases {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Serializes the phrases as a pretty-printed JSON array.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.0)?)
    }
}

impl fmt::Display for Phrases {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            writeln!(f, "No phrases found.")
        } else {
            for phrase in &self.0 {
                write!(f, "{}", phrase)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_phrases_display() {
        let phrases = Phrases(Vec::new());
        assert!(phrases.is_empty());
        assert_eq!(format!("{phrases}"), "No phrases found.\n");
        assert_eq!(phrases.to_json().unwrap(), "[]");
    }
}
