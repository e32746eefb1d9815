//! Search box. Owns no state: every keystroke goes to `on_change`, the
//! Enter key to `on_enter`.

use leptos::ev::KeyboardEvent;
use leptos::prelude::*;

#[component]
pub fn Search(
    #[prop(into)] on_change: Callback<String>,
    #[prop(into)] on_enter: Callback<()>,
    #[prop(optional, into)] placeholder: Option<String>,
) -> impl IntoView {
    let placeholder = placeholder.unwrap_or_else(|| "Search events".to_string());

    view! {
        <div class="search">
            <input
                type="search"
                class="search-input"
                placeholder=placeholder
                on:input=move |ev| on_change.run(event_target_value(&ev))
                on:keydown=move |ev: KeyboardEvent| {
                    if submits(&ev.key(), ev.is_composing()) {
                        on_enter.run(());
                    }
                }
            />
        </div>
    }
}

/// Enter submits, except while an IME composition is still open.
fn submits(key: &str, composing: bool) -> bool {
    key == "Enter" && !composing
}
