//! Pure arithmetic behind the page's scroll-driven effects. The UI layer
//! feeds in scroll offsets and bounding rects; everything here is
//! side-effect free so the thresholds stay testable off the DOM.

/// Vertical parallax rate applied to the hero background.
pub const PARALLAX_RATE: f64 = -0.3;

/// Scroll offset past which the navbar switches to its condensed look.
pub const NAVBAR_THRESHOLD_PX: f64 = 100.0;

/// The chat toggle reveals once the anchor section's top edge crosses this
/// fraction of the viewport height.
pub const REVEAL_VIEWPORT_FRACTION: f64 = 0.8;

/// Minimum visible fraction of a section before its fade-in class is added.
pub const FADE_IN_THRESHOLD: f64 = 0.1;

/// Background translateY in pixels for the given scroll offset.
pub fn parallax_offset(scroll_y: f64) -> f64 {
    scroll_y * PARALLAX_RATE
}

pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_THRESHOLD_PX
}

/// Whether a section whose top edge sits at `rect_top` (viewport
/// coordinates) has crossed the reveal threshold.
pub fn section_revealed(rect_top: f64, viewport_height: f64) -> bool {
    rect_top < viewport_height * REVEAL_VIEWPORT_FRACTION
}

/// Fraction of an element currently inside the viewport, in `[0, 1]`.
pub fn visible_fraction(rect_top: f64, rect_height: f64, viewport_height: f64) -> f64 {
    if rect_height <= 0.0 {
        return 0.0;
    }

    let visible_top = rect_top.max(0.0);
    let visible_bottom = (rect_top + rect_height).min(viewport_height);

    ((visible_bottom - visible_top) / rect_height).clamp(0.0, 1.0)
}

/// Whether enough of an element is visible to start its fade-in.
pub fn fade_in_ready(rect_top: f64, rect_height: f64, viewport_height: f64) -> bool {
    visible_fraction(rect_top, rect_height, viewport_height) >= FADE_IN_THRESHOLD
}
