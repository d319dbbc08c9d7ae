//! Document access seam.
//!
//! Routines talk to the page only through [`Page`], so the same code drives
//! the real DOM in the browser and an in-memory page in tests.

/// The subset of the DOM and window the page routines use.
///
/// Mutating methods are best-effort: a failing DOM call is ignored, matching
/// how the browser glue treats every presentation side effect.
pub trait Page {
    /// Handle to an element. Cheap to clone.
    type Element: Clone;

    /// The document root (`<html>`).
    fn root(&self) -> Option<Self::Element>;
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
    /// First element matching a CSS selector.
    fn query(&self, selector: &str) -> Option<Self::Element>;
    /// All elements matching a CSS selector, in document order.
    fn query_all(&self, selector: &str) -> Vec<Self::Element>;

    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;
    fn set_attribute(&self, element: &Self::Element, name: &str, value: &str);
    fn toggle_class(&self, element: &Self::Element, class: &str);
    fn remove_class(&self, element: &Self::Element, class: &str);
    fn has_class(&self, element: &Self::Element, class: &str) -> bool;
    fn text(&self, element: &Self::Element) -> Option<String>;
    fn set_text(&self, element: &Self::Element, text: &str);

    /// Rendered height in CSS pixels.
    fn offset_height(&self, element: &Self::Element) -> f64;
    /// Top edge relative to the viewport.
    fn viewport_top(&self, element: &Self::Element) -> f64;
    /// Current vertical scroll offset of the window.
    fn scroll_y(&self) -> f64;
    fn smooth_scroll_to(&self, top: f64);
    /// Push a URL into session history without navigating.
    fn push_history(&self, url: &str);

    /// `prefers-color-scheme: dark` media query.
    fn prefers_dark(&self) -> bool;
}
