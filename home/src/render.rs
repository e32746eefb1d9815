//! Static rendering of the landing page.

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use crate::components::EventHome;
use crate::styles::HOME_CSS;
use crate::types::HomeProps;

/// Render the landing page as a complete HTML document.
///
/// `is_mobile` picks the narrow header layout; the stylesheet handles the
/// rest of the responsive behaviour.
pub fn render_home(props: &HomeProps, is_mobile: bool) -> String {
    let title = if props.tag_message.is_empty() {
        "eventoL".to_string()
    } else {
        format!("eventoL - {}", props.tag_message)
    };

    let doc = view! {
        <html>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                <style>{HOME_CSS}</style>
            </head>
            <body>
                <EventHome
                    background=props.background.clone()
                    logo_header=props.logo_header.clone()
                    logo_landing=props.logo_landing.clone()
                    tag_message=props.tag_message.clone()
                    tag_slug=props.tag_slug.clone()
                    user=props.user.clone()
                    is_mobile=is_mobile
                />
            </body>
        </html>
    };

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", doc.to_html())
}
