//! Error type shared by props decoding and the events client.

use thiserror::Error;

/// Everything that can go wrong between the page props and a rendered list.
///
/// Payloads are plain strings so the error is `Clone` and can be stored in
/// a reactive resource.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HomeError {
    /// Page props JSON could not be decoded.
    #[error("invalid home props: {0}")]
    Props(String),

    /// The fetch promise rejected or a JS call threw.
    #[error("network error: {0}")]
    Network(String),

    /// The API answered with a non-2xx status.
    #[error("{url} responded with HTTP {status}")]
    Status { status: u16, url: String },

    /// The response body was not the expected event JSON.
    #[error("malformed events payload: {0}")]
    Decode(String),

    /// No `window` object (not running in a browser).
    #[error("window is not available")]
    NoWindow,
}
