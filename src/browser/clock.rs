//! Browser clock using the JS `Date` for locale-aware formatting.

use chrono::{Datelike, Local};
use wasm_bindgen::JsValue;

use crate::clock::Clock;

#[derive(Clone, Copy)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn current_year(&self) -> i32 {
        Local::now().year()
    }

    fn local_date(&self, epoch_seconds: i64) -> String {
        let millis = epoch_seconds as f64 * 1000.0;
        let date = js_sys::Date::new(&JsValue::from_f64(millis));
        date.to_locale_date_string("default", &JsValue::UNDEFINED)
            .into()
    }
}
