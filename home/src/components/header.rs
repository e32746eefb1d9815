//! Top bar: logo plus account links, collapsed behind a menu button on
//! narrow viewports.

use leptos::prelude::*;

use crate::types::User;

pub const LOGIN_URL: &str = "/accounts/login/";
pub const LOGOUT_URL: &str = "/accounts/logout/";
pub const PROFILE_URL: &str = "/accounts/profile/";

#[component]
pub fn Header(
    /// Logo image URL
    #[prop(optional, into)]
    logo_header: String,
    /// Signed-in user; `None` shows the sign-in link
    #[prop(optional_no_strip)]
    user: Option<User>,
    #[prop(into)] is_mobile: Signal<bool>,
) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    let class = move || {
        match (is_mobile.get(), menu_open.get()) {
            (false, _) => "header",
            (true, false) => "header header-mobile",
            (true, true) => "header header-mobile menu-open",
        }
    };

    let account = match user {
        Some(user) => view! {
            <span class="header-user">{format!("Hi, {}", user.display_name())}</span>
            <a href=PROFILE_URL>"Profile"</a>
            <a href=LOGOUT_URL>"Sign out"</a>
        }
        .into_any(),
        None => view! { <a href=LOGIN_URL class="header-login">"Sign in"</a> }.into_any(),
    };

    view! {
        <header class=class>
            <a href="/" class="header-logo">
                <img src=logo_header alt="eventoL" />
            </a>
            <button
                class="header-menu-toggle"
                aria-label="Menu"
                on:click=move |_| set_menu_open.update(|open| *open = !*open)
            >
                "☰"
            </button>
            <nav class="header-nav">
                <a href="/events/">"Events"</a>
                {account}
            </nav>
        </header>
    }
}
