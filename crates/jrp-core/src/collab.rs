//! Collaborators injected into the phrase store.
//!
//! The store needs exactly two capabilities besides the database engine: a
//! source of "now" for refreshing `updated_at`, and a stable in-place sort
//! used to put latest-N batches back into ascending id order.

use std::cmp::Ordering;

use jiff::Zoned;

use crate::models::Phrase;

/// Less-than predicate handed to a [`Sorter`].
pub type LessFn = fn(&Phrase, &Phrase) -> bool;

/// Source of the current time.
pub trait Clock: Send + Sync {
    /// Returns the current instant in the caller's time zone.
    fn now(&self) -> Zoned;
}

/// Stable in-place sort over phrase batches.
pub trait Sorter: Send + Sync {
    /// Sorts `phrases` so that `less` holds between out-of-order neighbours.
    /// Elements that compare equal keep their relative order.
    fn sort(&self, phrases: &mut [Phrase], less: LessFn);
}

/// Clock backed by the system time and time zone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Zoned {
        Zoned::now()
    }
}

/// Sorter backed by the standard library's stable merge sort.
#[derive(Debug, Default, Clone, Copy)]
pub struct StableSorter;

impl Sorter for StableSorter {
    fn sort(&self, phrases: &mut [Phrase], less: LessFn) {
        phrases.sort_by(|a, b| {
            if less(a, b) {
                Ordering::Less
            } else if less(b, a) {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        });
    }
}

/// Orders phrases by ascending id.
pub fn id_ascending(a: &Phrase, b: &Phrase) -> bool {
    a.id < b.id
}

#[cfg(test)]
mod tests {
    use jiff::{Timestamp, tz::TimeZone};

    use super::*;

    fn phrase(id: u64, text: &str) -> Phrase {
        let at = Timestamp::UNIX_EPOCH.to_zoned(TimeZone::UTC);
        Phrase {
            id,
            phrase: text.to_string(),
            prefix: None,
            suffix: None,
            is_favorited: false,
            created_at: at.clone(),
            updated_at: at,
        }
    }

    #[test]
    fn test_stable_sorter_orders_by_id() {
        let mut phrases = vec![phrase(3, "c"), phrase(1, "a"), phrase(2, "b")];
        StableSorter.sort(&mut phrases, id_ascending);
        let ids: Vec<u64> = phrases.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_stable_sorter_keeps_ties_in_input_order() {
        let mut phrases = vec![
            phrase(2, "second-a"),
            phrase(1, "first"),
            phrase(2, "second-b"),
        ];
        StableSorter.sort(&mut phrases, id_ascending);
        let texts: Vec<&str> = phrases.iter().map(|p| p.phrase.as_str()).collect();
        assert_eq!(texts, vec!["first", "second-a", "second-b"]);
    }

    #[test]
    fn test_system_clock_is_monotonic_enough() {
        let before = Timestamp::now();
        let now = SystemClock.now();
        assert!(now.timestamp() >= before);
    }
}
