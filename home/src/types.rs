//! Data types for the landing page: page props, the signed-in user and the
//! event summaries returned by the events API.
//!
//! These types are:
//!
//! - **Serializable** - props arrive as JSON from the server template, events
//!   from the REST API
//! - **Clone-friendly** - components take them by value
//! - **Default-able** - partial props work with `..Default::default()`
//!
//! # Example
//!
//! ```rust
//! use eventol_home::types::HomeProps;
//!
//! let props = HomeProps::from_json(r#"{"tagSlug": "flisol", "tagMessage": "Install fest"}"#).unwrap();
//! assert_eq!(props.tag_slug, "flisol");
//! assert_eq!(props.api_base, "/api/events/");
//! ```

use serde::{Deserialize, Serialize};

use crate::error::HomeError;

/// Default REST endpoint for event lists.
pub const DEFAULT_API_BASE: &str = "/api/events/";

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

/// Page configuration handed over by the server template.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HomeProps {
    /// Hero background image URL
    #[serde(default)]
    pub background: String,
    /// Logo shown in the header
    #[serde(default)]
    pub logo_header: String,
    /// Large logo shown in the hero
    #[serde(default)]
    pub logo_landing: String,
    /// Tagline for the current tag
    #[serde(default)]
    pub tag_message: String,
    /// Tag slug every list is filtered by
    #[serde(default)]
    pub tag_slug: String,
    /// Signed-in user, if any
    #[serde(default)]
    pub user: Option<User>,
    /// Prefix for event list requests
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Verbose browser logging
    #[serde(default)]
    pub debug: bool,
}

impl Default for HomeProps {
    fn default() -> Self {
        Self {
            background: String::new(),
            logo_header: String::new(),
            logo_landing: String::new(),
            tag_message: String::new(),
            tag_slug: String::new(),
            user: None,
            api_base: default_api_base(),
            debug: false,
        }
    }
}

impl HomeProps {
    /// Decode props from the JSON blob embedded in the page.
    pub fn from_json(json: &str) -> Result<Self, HomeError> {
        serde_json::from_str(json).map_err(|e| HomeError::Props(e.to_string()))
    }
}

/// The signed-in user as exposed to the page.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl User {
    /// Full name when the profile has one, otherwise the username.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }
}

/// One event as listed on the landing page.
///
/// Only the fields requested through [`crate::query::HOME_REQUIRED_FIELDS`]
/// are present; everything but `id`, `name` and `slug` is optional.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventSummary {
    pub id: u64,
    pub name: String,
    pub slug: String,
    #[serde(default, rename = "abstract")]
    pub summary: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub place: Option<String>,
    #[serde(default)]
    pub attendees_count: u32,
    #[serde(default)]
    pub last_date: Option<String>,
    #[serde(default)]
    pub registration_is_open: bool,
    #[serde(default)]
    pub external_url: Option<String>,
}

impl EventSummary {
    /// Link target: the external site when one is configured, otherwise
    /// the event's own page.
    pub fn href(&self) -> String {
        match self.external_url.as_deref() {
            Some(url) if !url.trim().is_empty() => url.to_string(),
            _ => format!("/event/{}/", self.slug),
        }
    }
}

/// Paginated list envelope returned by the events API.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventPage {
    pub count: usize,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<EventSummary>,
}

impl EventPage {
    /// Decode either the paginated envelope or a bare array of events.
    ///
    /// The shape is picked from the top-level JSON value, so a decode error
    /// names the field that is actually wrong.
    pub fn from_json(json: &str) -> Result<Self, HomeError> {
        let decode = |e: serde_json::Error| HomeError::Decode(e.to_string());
        let value: serde_json::Value = serde_json::from_str(json).map_err(decode)?;
        if value.is_array() {
            let results: Vec<EventSummary> = serde_json::from_value(value).map_err(decode)?;
            Ok(EventPage {
                count: results.len(),
                results,
                ..Default::default()
            })
        } else {
            serde_json::from_value(value).map_err(decode)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn props_fill_defaults() {
        let props = HomeProps::from_json("{}").unwrap();
        assert_eq!(props, HomeProps::default());
        assert_eq!(props.api_base, "/api/events/");
    }

    #[test]
    fn props_read_camel_case_keys() {
        let props = HomeProps::from_json(
            r#"{
                "background": "/media/bg.png",
                "logoHeader": "/static/logo-header.svg",
                "logoLanding": "/static/logo-landing.svg",
                "tagMessage": "Festival Latinoamericano",
                "tagSlug": "flisol",
                "user": {"username": "ada", "first_name": "Ada", "last_name": "Lovelace"},
                "apiBase": "https://eventol.example/api/events/",
                "debug": true
            }"#,
        )
        .unwrap();

        assert_eq!(props.logo_header, "/static/logo-header.svg");
        assert_eq!(props.tag_slug, "flisol");
        assert_eq!(props.api_base, "https://eventol.example/api/events/");
        assert!(props.debug);
        assert_eq!(props.user.unwrap().display_name(), "Ada Lovelace");
    }

    #[test]
    fn props_reject_malformed_json() {
        let err = HomeProps::from_json("{\"tagSlug\": 3}").unwrap_err();
        assert!(matches!(err, HomeError::Props(_)));
    }

    #[test]
    fn display_name_falls_back_to_username() {
        let user = User {
            username: "grace".into(),
            ..Default::default()
        };
        assert_eq!(user.display_name(), "grace");

        let user = User {
            username: "grace".into(),
            first_name: "Grace".into(),
            ..Default::default()
        };
        assert_eq!(user.display_name(), "Grace");
    }

    #[test]
    fn href_prefers_external_url() {
        let mut event = EventSummary {
            id: 1,
            name: "FLISoL CABA".into(),
            slug: "flisol-caba".into(),
            ..Default::default()
        };
        assert_eq!(event.href(), "/event/flisol-caba/");

        event.external_url = Some("  ".into());
        assert_eq!(event.href(), "/event/flisol-caba/");

        event.external_url = Some("https://flisol.info".into());
        assert_eq!(event.href(), "https://flisol.info");
    }

    #[test]
    fn page_decodes_paginated_envelope() {
        let page = EventPage::from_json(
            r#"{
                "count": 12,
                "next": "/api/events/?page=2",
                "previous": null,
                "results": [
                    {"id": 7, "name": "PyCon", "slug": "pycon", "abstract": "Python", "attendees_count": 300}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(page.count, 12);
        assert_eq!(page.next.as_deref(), Some("/api/events/?page=2"));
        assert_eq!(page.results[0].summary.as_deref(), Some("Python"));
        assert_eq!(page.results[0].attendees_count, 300);
    }

    #[test]
    fn page_decodes_bare_array() {
        let page = EventPage::from_json(
            r#"[{"id": 1, "name": "A", "slug": "a"}, {"id": 2, "name": "B", "slug": "b"}]"#,
        )
        .unwrap();
        assert_eq!(page.count, 2);
        assert!(page.next.is_none());
        assert!(!page.is_empty());
    }

    #[test]
    fn page_rejects_garbage() {
        let err = EventPage::from_json(r#"{"detail": "Not found."}"#).unwrap_err();
        assert!(matches!(err, HomeError::Decode(_)));
    }

    #[test]
    fn decode_errors_name_the_bad_field() {
        let err = EventPage::from_json(r#"{"detail": "Not found."}"#).unwrap_err();
        assert!(err.to_string().contains("missing field `count`"), "{err}");

        let err = EventPage::from_json(r#"[{"id": "seven", "name": "A", "slug": "a"}]"#).unwrap_err();
        assert!(err.to_string().contains("invalid type"), "{err}");

        let err = EventPage::from_json("{not json").unwrap_err();
        assert!(!err.to_string().contains("did not match any variant"));
    }
}
