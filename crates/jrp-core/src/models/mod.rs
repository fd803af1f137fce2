//! Data models for the phrase store.
//!
//! [`Phrase`] is the row type handed back to callers and [`NewPhrase`] is
//! the insert input. The status enums report the outcome category of each
//! mutating operation; see [`Outcome`] for how an error maps onto the
//! `…Failed` variants.

pub mod phrase;
pub mod status;


pub use phrase::{NewPhrase, Phrase};
pub use status::{AddStatus, Outcome, RemoveStatus, SaveStatus};
