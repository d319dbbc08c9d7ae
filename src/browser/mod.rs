//! Browser entry point and event wiring (wasm32 only).
//!
//! Listeners live for the whole page, so their closures are leaked with
//! `Closure::forget` once attached.

mod clock;
mod fetch;
mod logging;
mod page;
mod storage;

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, EventTarget};

use crate::config::{load_config, PageConfig};
use crate::controller::PageController;
use crate::scroll::ClickOutcome;

pub use clock::BrowserClock;
pub use fetch::BrowserFetch;
pub use page::BrowserPage;
pub use storage::LocalStorage;

type BrowserController = PageController<BrowserPage, LocalStorage, BrowserFetch, BrowserClock>;

/// Run now if the document is parsed, otherwise on `DOMContentLoaded`.
pub fn run() {
    let Some(page) = BrowserPage::new() else {
        return;
    };
    if page.document().ready_state() != "loading" {
        boot(page);
        return;
    }

    let document = page.document().clone();
    let on_ready = Closure::once_into_js(move || boot(page));
    let _ = document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref());
}

fn boot(page: BrowserPage) {
    let (config, config_error) = match load_config(&page) {
        Ok(config) => (config, None),
        Err(e) => (PageConfig::default(), Some(e)),
    };
    logging::init(config.log_level.into());
    if let Some(e) = config_error {
        tracing::warn!("{}, using defaults", e);
    }
    tracing::info!(
        "page-behavior v{} ({})",
        env!("PAGE_BEHAVIOR_VERSION"),
        env!("PAGE_BEHAVIOR_GIT_SHA")
    );

    let controller: Rc<BrowserController> = Rc::new(PageController::new(
        page,
        LocalStorage,
        BrowserFetch,
        BrowserClock,
        config,
    ));
    let init = controller.initialize();
    tracing::debug!(report = ?init.report, "page initialized");

    if let Some(button) = &init.theme_toggle {
        let controller = controller.clone();
        listen(button, "click", move |_| {
            controller.toggle_theme();
        });
    }

    if let Some(nav) = init.nav {
        let nav = Rc::new(nav);
        {
            let controller = controller.clone();
            let nav_for_toggle = nav.clone();
            listen(nav.toggle_control(), "click", move |_| {
                nav_for_toggle.on_toggle(controller.page());
            });
        }
        {
            let controller = controller.clone();
            let nav_for_menu = nav.clone();
            listen(nav.menu(), "click", move |event| {
                nav_for_menu.on_menu_click(controller.page(), lands_on_link(&event));
            });
        }
    }

    let scroller = Rc::new(init.scroller);
    for anchor in scroller.anchors() {
        let controller = controller.clone();
        let scroller = scroller.clone();
        let target = anchor.clone();
        listen(anchor, "click", move |event| {
            if let ClickOutcome::Scrolled { .. } = scroller.on_click(controller.page(), &target) {
                event.prevent_default();
            }
        });
    }

    let stats = init.stats;
    wasm_bindgen_futures::spawn_local(async move {
        controller.load_stats(stats.as_ref()).await;
    });
}

/// Whether a click landed on a link or inside one.
fn lands_on_link(event: &Event) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest("a").ok().flatten())
        .is_some()
}

fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        tracing::debug!("failed to attach {} listener: {:?}", event, e);
    }
    closure.forget();
}
