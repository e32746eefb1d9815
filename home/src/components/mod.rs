//! Leptos components for the landing page.
//!
//! # Component Hierarchy
//!
//! ```text
//! EventHome
//! ├── Header
//! ├── Hero
//! │   └── Search
//! ├── TitleList "Search results" (after a submitted search)
//! ├── TitleList "My Events"
//! ├── TitleList "Upcoming Events"
//! └── TitleList "Finished Events"
//!     └── EventCard (per event)
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use eventol_home::components::EventHome;
//!
//! view! { <EventHome tag_slug="flisol" user=None is_mobile=is_mobile /> }
//! ```

mod event_home;
mod header;
mod hero;
mod search;
mod title_list;

pub use event_home::{EventHome, HomeSearch};
pub use header::{Header, LOGIN_URL, LOGOUT_URL, PROFILE_URL};
pub use hero::Hero;
pub use search::Search;
pub use title_list::{EventCard, TitleList};
