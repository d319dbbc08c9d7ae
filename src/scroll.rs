//! Smooth in-page anchor scrolling with sticky-header compensation.

use crate::config::AnchorConfig;
use crate::page::Page;

/// Same-page links, matched once at setup.
pub const ANCHOR_SELECTOR: &str = r##"a[href^="#"]"##;

/// What happened to an anchor click.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClickOutcome {
    /// Not intercepted; the browser navigates as usual.
    Native,
    /// Default navigation must be suppressed; scrolled to `top`.
    Scrolled { top: f64 },
}

pub struct AnchorScroller<E> {
    anchors: Vec<E>,
    clearance: f64,
}

impl<E: Clone> AnchorScroller<E> {
    /// Snapshot the page's anchors and measure the header once.
    pub fn bind<P: Page<Element = E>>(page: &P, config: &AnchorConfig) -> Self {
        let header_height = page
            .query(&config.header_selector)
            .map_or(0.0, |header| page.offset_height(&header));
        let anchors = page.query_all(ANCHOR_SELECTOR);
        tracing::debug!(anchors = anchors.len(), header_height, "anchor scrolling bound");
        Self {
            anchors,
            clearance: header_height + config.header_padding,
        }
    }

    pub fn anchors(&self) -> &[E] {
        &self.anchors
    }

    /// Vertical space kept clear above the scroll target.
    pub fn clearance(&self) -> f64 {
        self.clearance
    }

    pub fn on_click<P: Page<Element = E>>(&self, page: &P, anchor: &E) -> ClickOutcome {
        let Some(href) = page.attribute(anchor, "href") else {
            return ClickOutcome::Native;
        };
        let Some(fragment) = href.strip_prefix('#').filter(|f| !f.is_empty()) else {
            return ClickOutcome::Native;
        };
        let Some(target) = page.element_by_id(fragment) else {
            return ClickOutcome::Native;
        };

        let top = page.viewport_top(&target) + page.scroll_y() - self.clearance;
        page.smooth_scroll_to(top);
        page.push_history(&href);
        ClickOutcome::Scrolled { top }
    }
}
