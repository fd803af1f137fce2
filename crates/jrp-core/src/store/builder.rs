//! Builder for configuring [`PhraseStore`] collaborators.

use super::PhraseStore;
use crate::collab::{Clock, Sorter, StableSorter, SystemClock};

/// Builder for creating and configuring PhraseStore instances.
#[derive(Default)]
pub struct PhraseStoreBuilder {
    clock: Option<Box<dyn Clock>>,
    sorter: Option<Box<dyn Sorter>>,
}

impl PhraseStoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the clock used to refresh `updated_at` on favorite toggles.
    ///
    /// Defaults to [`SystemClock`].
    pub fn with_clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    /// Sets the stable sort used to reorder latest-N batches.
    ///
    /// Defaults to [`StableSorter`].
    pub fn with_sorter<S: Sorter + 'static>(mut self, sorter: S) -> Self {
        self.sorter = Some(Box::new(sorter));
        self
    }

    /// Builds the configured store.
    pub fn build(self) -> PhraseStore {
        PhraseStore::with_collaborators(
            self.clock.unwrap_or_else(|| Box::new(SystemClock)),
            self.sorter.unwrap_or_else(|| Box::new(StableSorter)),
        )
    }
}
