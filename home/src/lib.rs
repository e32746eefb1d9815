//! # eventol-home
//!
//! Leptos event-discovery landing page.
//!
//! The page shows a header, a hero banner with a search box and four
//! filtered event lists: search results (after a search), the user's
//! events, upcoming events and finished events. Each list fetches its own
//! data from the events REST API with a query-string fragment built in
//! [`query`].
//!
//! ## Rendering
//!
//! - **Browser** - the `eventol-home-wasm` crate mounts
//!   [`components::EventHome`] with the `csr` feature and provides an
//!   [`client::EventsClient`] through context.
//! - **Static** - [`render_home`] renders a complete document with the `ssr`
//!   feature. Without a client in context the lists show their loading
//!   state.
//!
//! ```rust
//! use eventol_home::{render_home, types::HomeProps};
//!
//! let props = HomeProps {
//!     tag_slug: "flisol".into(),
//!     tag_message: "Install fest".into(),
//!     ..Default::default()
//! };
//!
//! let html = render_home(&props, false);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("Upcoming Events"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - page props and API payloads
//! - [`query`] - list query fragments
//! - [`state`] - search box state
//! - [`client`] - browser fetch of event pages
//! - [`components`] - Leptos UI components
//! - [`responsive`] - viewport breakpoint
//! - [`styles`] - CSS constants

pub mod client;
pub mod components;
pub mod error;
pub mod query;
pub mod responsive;
pub mod state;
pub mod styles;
pub mod types;

#[cfg(feature = "ssr")]
mod render;

pub use error::HomeError;
#[cfg(feature = "ssr")]
pub use render::render_home;

