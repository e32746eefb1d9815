//! Browser client for the events REST API.
//!
//! Provided to the component tree through Leptos context by the browser
//! entry point. When no client is in context (static pre-render) the lists
//! render their loading state and never touch the network.

use tracing::{debug, warn};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCredentials, RequestInit, Response};

use crate::error::HomeError;
use crate::types::EventPage;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventsClient {
    base_url: String,
}

impl EventsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute request path for a list fragment (`?key=value...`).
    pub fn endpoint(&self, fragment: &str) -> String {
        format!("{}{}", self.base_url, fragment)
    }

    /// `GET` one page of events. Browser only.
    pub async fn fetch_events(&self, fragment: &str) -> Result<EventPage, HomeError> {
        let url = self.endpoint(fragment);
        debug!(%url, "fetching events");

        let window = web_sys::window().ok_or(HomeError::NoWindow)?;

        let init = RequestInit::new();
        init.set_method("GET");
        init.set_credentials(RequestCredentials::SameOrigin);
        let request = Request::new_with_str_and_init(&url, &init).map_err(js_error)?;
        request
            .headers()
            .set("Accept", "application/json")
            .map_err(js_error)?;

        let response: Response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_error)?
            .dyn_into()
            .map_err(js_error)?;

        if !response.ok() {
            warn!(%url, status = response.status(), "events request failed");
            return Err(HomeError::Status {
                status: response.status(),
                url,
            });
        }

        let body = JsFuture::from(response.text().map_err(js_error)?)
            .await
            .map_err(js_error)?
            .as_string()
            .ok_or_else(|| HomeError::Decode("response body is not text".into()))?;

        let page = EventPage::from_json(&body)?;
        debug!(%url, count = page.count, "events loaded");
        Ok(page)
    }
}

fn js_error(value: JsValue) -> HomeError {
    HomeError::Network(
        value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value)),
    )
}
