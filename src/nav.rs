//! Mobile navigation toggle.

use crate::config::NavConfig;
use crate::feature::Missing;
use crate::page::Page;

const EXPANDED: &str = "aria-expanded";

/// A bound toggle control and the menu it expands.
pub struct NavToggle<E> {
    toggle: E,
    menu: E,
    open_class: String,
}

impl<E: Clone> NavToggle<E> {
    /// Both the toggle control and the menu must be present.
    pub fn bind<P: Page<Element = E>>(page: &P, config: &NavConfig) -> Result<Self, Missing> {
        let toggle = page
            .query(&config.toggle_selector)
            .ok_or_else(|| Missing::new(config.toggle_selector.clone()))?;
        let menu = page
            .element_by_id(&config.menu_id)
            .ok_or_else(|| Missing::new(format!("#{}", config.menu_id)))?;
        Ok(Self {
            toggle,
            menu,
            open_class: config.open_class.clone(),
        })
    }

    pub fn toggle_control(&self) -> &E {
        &self.toggle
    }

    pub fn menu(&self) -> &E {
        &self.menu
    }

    pub fn is_expanded<P: Page<Element = E>>(&self, page: &P) -> bool {
        page.attribute(&self.toggle, EXPANDED).as_deref() == Some("true")
    }

    /// Toggle control activated.
    pub fn on_toggle<P: Page<Element = E>>(&self, page: &P) {
        let expanded = !self.is_expanded(page);
        page.set_attribute(&self.toggle, EXPANDED, if expanded { "true" } else { "false" });
        page.toggle_class(&self.menu, &self.open_class);
    }

    /// Click somewhere inside the menu. `on_link` is whether the click landed
    /// on or within a link.
    pub fn on_menu_click<P: Page<Element = E>>(&self, page: &P, on_link: bool) {
        if !on_link {
            return;
        }
        page.remove_class(&self.menu, &self.open_class);
        page.set_attribute(&self.toggle, EXPANDED, "false");
    }
}
