//! Display formatting for phrases and operation outcomes.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! the wrappers here cover collections and confirmation lines. All output
//! is markdown so the CLI can render it with its terminal skin or print it
//! as plain text.
//!
//! - [`collections`]: [`Phrases`] list wrapper
//! - [`status`]: [`OperationStatus`] confirmation lines
//! - [`datetime`]: timestamp formatting

pub mod collections;
pub mod datetime;
pub mod models;
pub mod status;

pub use collections::Phrases;
pub use datetime::LocalDateTime;
pub use status::OperationStatus;
