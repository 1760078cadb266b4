//! The page's element tree as seen by the behavior modules.
//!
//! Behavior code never reaches for a global document. It receives a
//! [`RenderSurface`] and works only through class markers and element ids.

pub const HIDDEN_MARKER: &str = "hidden";
pub const SHOW_MARKER: &str = "show";
pub const REVEAL_MARKER: &str = "reveal";
pub const ACTIVE_MARKER: &str = "active";

pub trait RenderSurface {
    type Element: Clone;

    /// Elements carrying `marker` in their class list, in document order.
    fn elements_with_marker(&self, marker: &str) -> Vec<Self::Element>;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    fn has_marker(&self, element: &Self::Element, marker: &str) -> bool;

    fn add_marker(&self, element: &Self::Element, marker: &str);

    fn smooth_scroll_to(&self, element: &Self::Element);
}

/// Id referenced by a same-page link, or `None` when `href` is not a fragment.
///
/// A bare `#` is still a fragment; it yields `Some("")`.
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#')
}
