//! Landing banner hosting the search box.

use leptos::prelude::*;

#[component]
pub fn Hero(
    /// Background image URL
    #[prop(optional, into)]
    background: String,
    #[prop(optional, into)] logo_landing: String,
    /// Tagline shown under the logo
    #[prop(optional, into)]
    message: String,
    /// Tag slug the page is scoped to
    #[prop(optional, into)]
    slug: String,
    children: Children,
) -> impl IntoView {
    let style = if background.is_empty() {
        String::new()
    } else {
        format!("background-image: url({})", background)
    };
    let slug = (!slug.is_empty()).then_some(slug);

    view! {
        <section class="hero" style=style data-tag=slug>
            {(!logo_landing.is_empty()).then(|| view! {
                <img class="hero-logo" src=logo_landing alt="eventoL" />
            })}
            {(!message.is_empty()).then(|| view! {
                <h2 class="hero-message">{message}</h2>
            })}
            {children()}
        </section>
    }
}
