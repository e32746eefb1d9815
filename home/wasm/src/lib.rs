//! Browser entry point for the eventoL landing page.
//!
//! Reads the page props the server template embeds as
//!
//! ```html
//! <script id="event-home-props" type="application/json">{"tagSlug": "flisol", ...}</script>
//! ```
//!
//! installs console logging, provides an [`EventsClient`] and mounts
//! [`EventHome`] on `<body>`.

mod logging;
mod viewport;

use eventol_home::HomeError;
use eventol_home::client::EventsClient;
use eventol_home::components::EventHome;
use eventol_home::types::HomeProps;
use leptos::prelude::*;
use tracing::{info, warn};
use wasm_bindgen::prelude::*;

pub use viewport::{use_is_mobile, viewport_width};

/// Id of the `<script>` element holding the JSON props.
pub const PROPS_ELEMENT_ID: &str = "event-home-props";

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let props = read_props();
    logging::init(props.as_ref().map(|p| p.debug).unwrap_or(false));
    let props = props.unwrap_or_else(|err| {
        warn!(%err, "using default props");
        HomeProps::default()
    });

    info!(
        tag = %props.tag_slug,
        api = %props.api_base,
        "mounting event home v{}",
        env!("CARGO_PKG_VERSION")
    );

    leptos::mount::mount_to_body(move || {
        provide_context(EventsClient::new(props.api_base.clone()));
        let is_mobile = use_is_mobile();

        view! {
            <EventHome
                background=props.background
                logo_header=props.logo_header
                logo_landing=props.logo_landing
                tag_message=props.tag_message
                tag_slug=props.tag_slug
                user=props.user
                is_mobile=is_mobile
            />
        }
    });
}

fn read_props() -> Result<HomeProps, HomeError> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(HomeError::NoWindow)?;
    let text = document
        .get_element_by_id(PROPS_ELEMENT_ID)
        .and_then(|element| element.text_content());
    props_from_text(text.as_deref())
}

/// Missing or blank props mean "all defaults".
pub fn props_from_text(text: Option<&str>) -> Result<HomeProps, HomeError> {
    match text.map(str::trim) {
        None | Some("") => Ok(HomeProps::default()),
        Some(json) => HomeProps::from_json(json),
    }
}
