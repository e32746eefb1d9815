//! Local search state of the landing page.
//!
//! Kept free of reactive types so the input rules can be tested without a
//! browser; [`crate::components::EventHome`] wraps it in an `RwSignal`.

use tracing::debug;

use crate::query::search_query;

/// Search box text plus the fragment of the last submitted search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchState {
    term: String,
    url: String,
    searched: bool,
}

impl SearchState {
    /// Store the raw input text. Does not touch a previous submission.
    pub fn on_change(&mut self, term: impl Into<String>) {
        self.term = term.into();
    }

    /// Submit the current term. Returns `false` (and changes nothing) when
    /// the term is empty.
    pub fn on_enter(&mut self, tag_slug: &str) -> bool {
        if self.term.is_empty() {
            return false;
        }
        self.url = search_query(&self.term, tag_slug);
        self.searched = true;
        debug!(url = %self.url, "search submitted");
        true
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    /// Fragment of the last submission; empty until [`Self::searched`].
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn searched(&self) -> bool {
        self.searched
    }
}
