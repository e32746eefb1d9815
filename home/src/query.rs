//! Query-string fragments for the event lists.
//!
//! Every list on the landing page is a filtered view of the same REST
//! endpoint; the fragment built here is appended to the API base by
//! [`crate::client::EventsClient`].

/// Fields the landing page needs for an event card.
pub const HOME_REQUIRED_FIELDS: &[&str] = &[
    "id",
    "name",
    "slug",
    "abstract",
    "image",
    "place",
    "attendees_count",
    "last_date",
    "registration_is_open",
    "external_url",
];

/// Ordered `key=value` builder rendering to `?k1=v1&k2=v2`.
///
/// Values are percent-encoded; keys are trusted constants.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventQuery {
    params: Vec<(&'static str, String)>,
}

impl EventQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn param(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.params.push((key, value.into()));
        self
    }

    pub fn search(self, term: &str) -> Self {
        self.param("search", term)
    }

    pub fn tag(self, slug: &str) -> Self {
        self.param("tags__slug", slug)
    }

    pub fn my_events(self) -> Self {
        self.param("my_events", "true")
    }

    pub fn registration_open(self, open: bool) -> Self {
        self.param("registration_is_open", open.to_string())
    }

    /// `field` sorts ascending, `-field` descending.
    pub fn ordering(self, field: &str) -> Self {
        self.param("ordering", field)
    }

    pub fn home_fields(self) -> Self {
        self.param("fields", HOME_REQUIRED_FIELDS.join(","))
    }

    pub fn build(&self) -> String {
        let pairs: Vec<String> = self
            .params
            .iter()
            .map(|(key, value)| format!("{}={}", key, encode_value(value)))
            .collect();
        format!("?{}", pairs.join("&"))
    }
}

// Commas separate field names and stay literal.
fn encode_value(value: &str) -> String {
    value
        .split(',')
        .map(|part| urlencoding::encode(part).into_owned())
        .collect::<Vec<_>>()
        .join(",")
}

/// Full-text search within a tag.
pub fn search_query(term: &str, tag_slug: &str) -> String {
    EventQuery::new()
        .search(term)
        .tag(tag_slug)
        .home_fields()
        .build()
}

/// Events the signed-in user is registered to.
pub fn my_events_query(tag_slug: &str) -> String {
    EventQuery::new().my_events().tag(tag_slug).home_fields().build()
}

/// Events still open for registration, soonest first.
pub fn upcoming_query(tag_slug: &str) -> String {
    EventQuery::new()
        .registration_open(true)
        .ordering("last_date")
        .tag(tag_slug)
        .home_fields()
        .build()
}

/// Closed events, most attended first.
pub fn finished_query(tag_slug: &str) -> String {
    EventQuery::new()
        .registration_open(false)
        .ordering("-attendees_count")
        .tag(tag_slug)
        .home_fields()
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FIELDS: &str = "id,name,slug,abstract,image,place,attendees_count,last_date,registration_is_open,external_url";

    #[test]
    fn search_fragment_matches_api_contract() {
        assert_eq!(
            search_query("linux", "flisol"),
            format!("?search=linux&tags__slug=flisol&fields={FIELDS}")
        );
    }

    #[test]
    fn fixed_list_fragments() {
        assert_eq!(
            my_events_query("flisol"),
            format!("?my_events=true&tags__slug=flisol&fields={FIELDS}")
        );
        assert_eq!(
            upcoming_query("flisol"),
            format!(
                "?registration_is_open=true&ordering=last_date&tags__slug=flisol&fields={FIELDS}"
            )
        );
        assert_eq!(
            finished_query("flisol"),
            format!(
                "?registration_is_open=false&ordering=-attendees_count&tags__slug=flisol&fields={FIELDS}"
            )
        );
    }

    #[test]
    fn empty_slug_keeps_the_parameter() {
        assert!(my_events_query("").contains("&tags__slug=&"));
    }

    #[test]
    fn search_term_is_percent_encoded() {
        let url = search_query("rust & go", "flisol");
        assert!(url.starts_with("?search=rust%20%26%20go&tags__slug=flisol&"));
    }

    #[test]
    fn commas_inside_a_term_stay_literal() {
        let url = EventQuery::new().search("a,b c").build();
        assert_eq!(url, "?search=a,b%20c");
    }
}
