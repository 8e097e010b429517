//! Cached list of bots owned by the current user.
//!
//! DESIGN
//! ======
//! `items == None` means "not yet loaded" and is kept distinct from an empty
//! list. The layout is the only writer; everything else reads through the
//! `RwSignal<BotsState>` context.

#[cfg(test)]
#[path = "bots_test.rs"]
mod bots_test;

use crate::net::types::BotSummary;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BotsState {
    pub items: Option<Vec<BotSummary>>,
    pub loading: bool,
    pub error: Option<String>,
}

impl BotsState {
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.items.is_some()
    }

    /// The last fetch failed and nothing is cached.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        self.items.is_none() && !self.loading && self.error.is_some()
    }

    /// True when nothing is cached, no request is in flight, and the last
    /// attempt did not fail. Failed fetches are not retried until reset.
    #[must_use]
    pub fn needs_fetch(&self) -> bool {
        self.items.is_none() && !self.loading && self.error.is_none()
    }

    /// Loaded bots in fetch order, or an empty slice before the first load.
    #[must_use]
    pub fn bots(&self) -> &[BotSummary] {
        self.items.as_deref().unwrap_or_default()
    }

    pub fn begin_fetch(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Store the outcome of a fetch. A failure leaves the cache unloaded.
    pub fn finish_fetch(&mut self, result: Result<Vec<BotSummary>, String>) {
        self.loading = false;
        match result {
            Ok(bots) => {
                self.items = Some(bots);
                self.error = None;
            }
            Err(e) => self.error = Some(e),
        }
    }
}
