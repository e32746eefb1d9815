//! Titled row of event cards backed by one API query.

use leptos::prelude::*;

use crate::client::EventsClient;
use crate::error::HomeError;
use crate::types::{EventPage, EventSummary};

/// Fetches `url` through the [`EventsClient`] in context and renders the
/// result.
///
/// An empty result hides the whole section unless `show_empty` is set, in
/// which case a "no events" line is shown (used for search results).
#[component]
pub fn TitleList(
    #[prop(into)] title: String,
    /// Query fragment, e.g. `?my_events=true&tags__slug=flisol`
    #[prop(into)]
    url: String,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] show_empty: bool,
) -> impl IntoView {
    let events = use_context::<EventsClient>().map(|client| {
        let url = url.clone();
        LocalResource::new(move || {
            let client = client.clone();
            let url = url.clone();
            async move { client.fetch_events(&url).await }
        })
    });

    move || {
        let loaded = events.as_ref().and_then(|res| res.get());
        match list_body(loaded, show_empty) {
            None => ().into_any(),
            Some(body) => view! {
                <section class="title-list" id=id.clone() data-url=url.clone()>
                    <h2>{title.clone()}</h2>
                    {body}
                </section>
            }
            .into_any(),
        }
    }
}

/// Content under a list title for the current fetch state; `None` hides
/// the whole section (empty result without `show_empty`).
fn list_body(loaded: Option<Result<EventPage, HomeError>>, show_empty: bool) -> Option<AnyView> {
    let body = match loaded {
        None => view! { <p class="title-list-status">"Loading events…"</p> }.into_any(),
        Some(Err(err)) => {
            tracing::warn!(%err, "event list failed");
            view! { <p class="title-list-error">"Events could not be loaded."</p> }.into_any()
        }
        Some(Ok(page)) if page.is_empty() => {
            if !show_empty {
                return None;
            }
            view! { <p class="title-list-empty">"No events found."</p> }.into_any()
        }
        Some(Ok(page)) => view! {
            <div class="title-list-items">
                {page.results.into_iter().map(|event| view! { <EventCard event=event /> }).collect::<Vec<_>>()}
            </div>
        }
        .into_any(),
    };
    Some(body)
}

/// One event in a [`TitleList`] row.
#[component]
pub fn EventCard(event: EventSummary) -> impl IntoView {
    let href = event.href();
    let attendees = match event.attendees_count {
        0 => None,
        1 => Some("1 attendee".to_string()),
        n => Some(format!("{} attendees", n)),
    };

    view! {
        <a class="event-card" href=href>
            {event.image.map(|src| view! { <img src=src alt=event.name.clone() /> })}
            <div class="event-card-body">
                <h3 class="event-card-name">{event.name.clone()}</h3>
                {event.last_date.map(|date| view! { <div class="event-card-meta">{date}</div> })}
                {attendees.map(|text| view! { <div class="event-card-meta">{text}</div> })}
                {event.registration_is_open.then(|| view! {
                    <div class="event-card-badge">"Registration open"</div>
                })}
            </div>
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn without_client_renders_loading_section() {
        let html = view! {
            <TitleList id="next" title="Upcoming Events" url="?registration_is_open=true" />
        }
        .to_html();

        assert!(html.contains("id=\"next\""));
        assert!(html.contains("Upcoming Events"));
        assert!(html.contains("data-url=\"?registration_is_open=true\""));
        assert!(html.contains("Loading events"));
    }

    #[test]
    fn id_is_optional() {
        let html = view! { <TitleList show_empty=true title="Search results" url="?search=go" /> }
            .to_html();
        assert!(!html.contains("id="));
        assert!(html.contains("Search results"));
    }

    #[test]
    fn event_card_links_and_counts() {
        let event = EventSummary {
            id: 3,
            name: "FLISoL Rosario".into(),
            slug: "flisol-rosario".into(),
            image: Some("/media/rosario.png".into()),
            attendees_count: 42,
            last_date: Some("2026-04-25".into()),
            registration_is_open: true,
            ..Default::default()
        };
        let html = view! { <EventCard event=event /> }.to_html();

        assert!(html.contains("href=\"/event/flisol-rosario/\""));
        assert!(html.contains("/media/rosario.png"));
        assert!(html.contains("42 attendees"));
        assert!(html.contains("2026-04-25"));
        assert!(html.contains("Registration open"));
    }

    #[test]
    fn event_card_without_extras() {
        let event = EventSummary {
            id: 4,
            name: "Meetup".into(),
            slug: "meetup".into(),
            ..Default::default()
        };
        let html = view! { <EventCard event=event /> }.to_html();

        assert!(!html.contains("<img"));
        assert!(!html.contains("attendee"));
        assert!(!html.contains("Registration open"));
    }

    fn page(names: &[&str]) -> EventPage {
        let results: Vec<EventSummary> = names
            .iter()
            .enumerate()
            .map(|(i, name)| EventSummary {
                id: i as u64 + 1,
                name: name.to_string(),
                slug: name.to_lowercase().replace(' ', "-"),
                ..Default::default()
            })
            .collect();
        EventPage {
            count: results.len(),
            results,
            ..Default::default()
        }
    }

    fn body_html(loaded: Option<Result<EventPage, HomeError>>, show_empty: bool) -> Option<String> {
        list_body(loaded, show_empty).map(|body| body.to_html())
    }

    #[test]
    fn pending_fetch_shows_loading_line() {
        let html = body_html(None, false).unwrap();
        assert!(html.contains("title-list-status"));
    }

    #[test]
    fn loaded_page_renders_one_card_per_event() {
        let html = body_html(Some(Ok(page(&["FLISoL Lima", "PyDay Quito"]))), false).unwrap();

        assert_eq!(html.matches("class=\"event-card\"").count(), 2);
        assert!(html.contains("href=\"/event/flisol-lima/\""));
        assert!(html.contains("PyDay Quito"));
    }

    #[test]
    fn failed_fetch_shows_error_line() {
        let err = HomeError::Status {
            status: 500,
            url: "/api/events/?my_events=true".into(),
        };
        let html = body_html(Some(Err(err)), true).unwrap();

        assert!(html.contains("Events could not be loaded."));
        assert!(!html.contains("event-card"));
    }

    #[test]
    fn empty_result_hides_section_by_default() {
        assert!(body_html(Some(Ok(page(&[]))), false).is_none());
    }

    #[test]
    fn empty_search_result_says_so() {
        let html = body_html(Some(Ok(page(&[]))), true).unwrap();
        assert!(html.contains("No events found."));
    }
}
