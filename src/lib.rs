//! Page Behavior - client-side glue for a static personal site
//!
//! Compiled to WebAssembly and loaded by the site's pages. Provides:
//! - Light/dark theme with a persisted explicit choice
//! - Mobile navigation toggle
//! - Smooth in-page anchor scrolling below a sticky header
//! - Footer year stamp
//! - A Codeforces rating / latest-contest widget
//!
//! Everything except the `browser` module is target-independent and talks to
//! the document through the [`page::Page`] trait.

pub mod clock;
pub mod config;
pub mod controller;
pub mod error;
pub mod feature;
pub mod nav;
pub mod page;
pub mod scroll;
pub mod stats;
pub mod storage;
pub mod theme;
pub mod year;

#[cfg(target_arch = "wasm32")]
pub mod browser;

#[cfg(test)]
pub(crate) mod testing;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// wasm-bindgen entry point, run when the module is instantiated.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    browser::run();
}
