//! The landing page itself.

use leptos::prelude::*;

use super::{Header, Hero, Search, TitleList};
use crate::query::{finished_query, my_events_query, upcoming_query};
use crate::state::SearchState;
use crate::types::User;

/// Search state of the page plus the values the results list renders from.
///
/// `searched` and `url` are memos, so typing after a search does not touch
/// the results list; only a new non-empty submission does.
#[derive(Clone, Copy)]
pub struct HomeSearch {
    state: RwSignal<SearchState>,
    pub searched: Memo<bool>,
    pub url: Memo<String>,
}

impl HomeSearch {
    pub fn new() -> Self {
        let state = RwSignal::new(SearchState::default());
        Self {
            state,
            searched: Memo::new(move |_| state.with(|s| s.searched())),
            url: Memo::new(move |_| state.with(|s| s.url().to_string())),
        }
    }

    pub fn on_change(&self, term: String) {
        self.state.update(|s| s.on_change(term));
    }

    /// Submit the current term; an empty term notifies nobody.
    pub fn on_enter(&self, tag_slug: &str) {
        self.state.maybe_update(|s| s.on_enter(tag_slug));
    }

    /// Handler for [`Search`]'s `on_change`.
    pub fn change_callback(self) -> Callback<String> {
        Callback::new(move |term: String| self.on_change(term))
    }

    /// Handler for [`Search`]'s `on_enter`, scoped to one tag.
    pub fn enter_callback(self, tag_slug: String) -> Callback<()> {
        Callback::new(move |_: ()| self.on_enter(&tag_slug))
    }
}

impl Default for HomeSearch {
    fn default() -> Self {
        Self::new()
    }
}

/// Header, hero with search, and the event lists for one tag.
///
/// The search results list appears only after a non-empty search has been
/// submitted with Enter.
#[component]
pub fn EventHome(
    #[prop(optional, into)] background: String,
    #[prop(optional, into)] logo_header: String,
    #[prop(optional, into)] logo_landing: String,
    #[prop(optional, into)] tag_message: String,
    #[prop(optional, into)] tag_slug: String,
    #[prop(optional_no_strip)] user: Option<User>,
    /// Narrow-viewport layout
    #[prop(into)]
    is_mobile: Signal<bool>,
    /// Search state owned by the caller; a fresh one by default
    #[prop(optional_no_strip)]
    search: Option<HomeSearch>,
) -> impl IntoView {
    let search = search.unwrap_or_default();
    let on_change = search.change_callback();
    let on_enter = search.enter_callback(tag_slug.clone());

    view! {
        <div class="event-home">
            <Header logo_header=logo_header user=user is_mobile=is_mobile />
            <Hero background=background logo_landing=logo_landing message=tag_message slug=tag_slug.clone()>
                <Search on_change=on_change on_enter=on_enter />
            </Hero>
            <Show when=move || search.searched.get()>
                {move || view! {
                    <TitleList show_empty=true title="Search results" url=search.url.get() />
                }}
            </Show>
            <TitleList id="my_events" title="My Events" url=my_events_query(&tag_slug) />
            <TitleList id="next" title="Upcoming Events" url=upcoming_query(&tag_slug) />
            <TitleList id="finished" title="Finished Events" url=finished_query(&tag_slug) />
        </div>
    }
}
