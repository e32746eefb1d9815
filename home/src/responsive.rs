//! Viewport width to layout mapping.

/// Viewports narrower than this get the mobile layout.
pub const MOBILE_BREAKPOINT: f64 = 950.0;

pub fn is_mobile(width: f64) -> bool {
    width < MOBILE_BREAKPOINT
}
