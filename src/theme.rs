//! Theme management with localStorage persistence.
//!
//! The applied theme lives in a single attribute on the document root. An
//! explicit user choice is persisted and wins over the OS color scheme on
//! later visits; the OS-derived default is applied but never stored.

use crate::config::ThemeConfig;
use crate::feature::Missing;
use crate::page::Page;
use crate::storage::{PreferenceSlot, PreferenceStore};

/// Theme options
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
    /// A stored value this crate never produces. Applied verbatim.
    Custom(String),
}

impl Theme {
    /// Parse an attribute or stored value. Empty input means "no theme".
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "" => None,
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            other => Some(Theme::Custom(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Custom(value) => value,
        }
    }

    pub fn from_color_scheme(prefers_dark: bool) -> Self {
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Dark flips to light; everything else flips to dark.
    pub fn flipped(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            _ => Theme::Dark,
        }
    }
}

pub struct ThemeManager<S> {
    slot: PreferenceSlot<S>,
    attribute: String,
    toggle_id: String,
}

impl<S: PreferenceStore> ThemeManager<S> {
    pub fn new(store: S, config: &ThemeConfig) -> Self {
        Self {
            slot: PreferenceSlot::new(store, config.storage_key.clone()),
            attribute: config.attribute.clone(),
            toggle_id: config.toggle_id.clone(),
        }
    }

    /// Apply the persisted theme, or the OS preference when nothing is stored.
    pub fn initialize<P: Page>(&self, page: &P) -> Theme {
        if let Some(saved) = self.slot.read().as_deref().and_then(Theme::parse) {
            tracing::debug!(theme = saved.as_str(), "restoring saved theme");
            self.apply(page, &saved);
            return saved;
        }

        let initial = Theme::from_color_scheme(page.prefers_dark());
        tracing::debug!(theme = initial.as_str(), "no saved theme, using color scheme");
        self.apply(page, &initial);
        initial
    }

    pub fn apply<P: Page>(&self, page: &P, theme: &Theme) {
        if let Some(root) = page.root() {
            page.set_attribute(&root, &self.attribute, theme.as_str());
        }
    }

    /// Theme currently applied to the document root
    pub fn current<P: Page>(&self, page: &P) -> Option<Theme> {
        let root = page.root()?;
        page.attribute(&root, &self.attribute)
            .as_deref()
            .and_then(Theme::parse)
    }

    /// Flip the applied theme, persist it, and update the toggle control.
    pub fn toggle<P: Page>(&self, page: &P) -> Theme {
        let next = self
            .current(page)
            .map_or(Theme::Dark, |current| current.flipped());
        self.apply(page, &next);
        self.slot.write(next.as_str());
        if let Some(button) = page.element_by_id(&self.toggle_id) {
            set_pressed(page, &button, next.is_dark());
        }
        next
    }

    /// Locate the toggle control and sync its pressed state with the applied theme.
    pub fn bind_toggle<P: Page>(&self, page: &P) -> Result<P::Element, Missing> {
        let button = page
            .element_by_id(&self.toggle_id)
            .ok_or_else(|| Missing::new(format!("#{}", self.toggle_id)))?;
        let dark = self.current(page).is_some_and(|theme| theme.is_dark());
        set_pressed(page, &button, dark);
        Ok(button)
    }
}

fn set_pressed<P: Page>(page: &P, button: &P::Element, pressed: bool) {
    page.set_attribute(button, "aria-pressed", if pressed { "true" } else { "false" });
}
