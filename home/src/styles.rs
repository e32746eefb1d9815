//! CSS for the landing page.
//!
//! Inlined by [`crate::render_home`] into pre-rendered documents; the
//! browser build expects the same rules from the page template.
//!
//! ```rust
//! use eventol_home::styles::HOME_CSS;
//!
//! let themed = format!("{}\n.hero {{ min-height: 60vh; }}", HOME_CSS);
//! assert!(themed.contains(".title-list"));
//! ```

/// Complete stylesheet: header, hero, search box and event rows.
pub const HOME_CSS: &str = r#"
:root {
    --bg: #fafafa;
    --bg-card: #ffffff;
    --text: #212121;
    --text-dim: #616161;
    --accent: #2e7d32;
    --border: rgba(0, 0, 0, 0.12);
    --radius: 6px;
    --font: 'Roboto', 'Helvetica Neue', Arial, sans-serif;
}

*, *::before, *::after {
    box-sizing: border-box;
}

body {
    margin: 0;
    background: var(--bg);
    color: var(--text);
    font-family: var(--font);
}

/* Header */
.header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 12px 32px;
    background: var(--bg-card);
    border-bottom: 1px solid var(--border);
}
.header-logo img { height: 40px; }
.header-nav { display: flex; gap: 16px; align-items: center; }
.header-nav a { color: var(--text); text-decoration: none; }
.header-menu-toggle { display: none; }
.header.header-mobile { padding: 8px 16px; }
.header.header-mobile .header-nav { display: none; }
.header.header-mobile .header-menu-toggle {
    display: block;
    background: none;
    border: 1px solid var(--border);
    border-radius: var(--radius);
    padding: 4px 10px;
}
.header.header-mobile.menu-open .header-nav {
    display: flex;
    flex-direction: column;
    position: absolute;
    top: 56px;
    right: 16px;
    padding: 12px;
    background: var(--bg-card);
    border: 1px solid var(--border);
}

/* Hero */
.hero {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 20px;
    padding: 64px 24px;
    background-size: cover;
    background-position: center;
    color: #ffffff;
    text-align: center;
}
.hero-logo { max-width: 320px; width: 70%; }
.hero-message { font-size: 1.5rem; margin: 0; text-shadow: 0 1px 3px rgba(0, 0, 0, 0.5); }

/* Search */
.search { width: 100%; max-width: 560px; }
.search-input {
    width: 100%;
    padding: 12px 16px;
    font-size: 1rem;
    border: none;
    border-radius: var(--radius);
    box-shadow: 0 2px 6px rgba(0, 0, 0, 0.25);
}

/* Event lists */
.title-list { padding: 24px 32px; }
.title-list h2 { margin: 0 0 12px; font-weight: 400; }
.title-list-items {
    display: flex;
    gap: 16px;
    overflow-x: auto;
    padding-bottom: 8px;
}
.title-list-status, .title-list-empty { color: var(--text-dim); }
.title-list-error { color: #c62828; }

.event-card {
    flex: 0 0 240px;
    display: flex;
    flex-direction: column;
    background: var(--bg-card);
    border: 1px solid var(--border);
    border-radius: var(--radius);
    color: inherit;
    text-decoration: none;
    overflow: hidden;
}
.event-card img { width: 100%; height: 130px; object-fit: cover; }
.event-card-body { padding: 10px 12px; }
.event-card-name { margin: 0 0 6px; font-size: 1rem; }
.event-card-meta { font-size: 0.85rem; color: var(--text-dim); }
.event-card-badge { color: var(--accent); font-weight: 500; }

@media (max-width: 949px) {
    .title-list { padding: 16px; }
    .event-card { flex-basis: 70vw; }
}
"#;
