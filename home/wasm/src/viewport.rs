//! Reactive mobile flag driven by `window.innerWidth`.

use eventol_home::responsive::{MOBILE_BREAKPOINT, is_mobile};
use leptos::prelude::*;

/// `true` while the viewport is narrower than the mobile breakpoint.
/// Follows `resize` events for the lifetime of the page.
pub fn use_is_mobile() -> Signal<bool> {
    let width = RwSignal::new(viewport_width());
    let _listener = window_event_listener(leptos::ev::resize, move |_| {
        width.set(viewport_width());
    });
    Signal::derive(move || is_mobile(width.get()))
}

/// Unknown widths count as desktop.
pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(MOBILE_BREAKPOINT)
}
