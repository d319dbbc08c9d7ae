//! `window.fetch` JSON client.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestCache, RequestInit, Response};

use crate::error::StatsError;
use crate::stats::api::JsonFetch;

pub struct BrowserFetch;

fn transport(e: JsValue) -> StatsError {
    StatsError::Transport(format!("{:?}", e))
}

fn decode(e: JsValue) -> StatsError {
    StatsError::Decode(format!("{:?}", e))
}

#[async_trait(?Send)]
impl JsonFetch for BrowserFetch {
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, StatsError> {
        let window = web_sys::window().ok_or_else(|| StatsError::Transport("No window".into()))?;

        let headers = Headers::new().map_err(transport)?;
        headers
            .set("Accept", "application/json")
            .map_err(transport)?;

        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_headers(&headers);
        opts.set_cache(RequestCache::NoStore);

        let request = Request::new_with_str_and_init(url, &opts).map_err(transport)?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(transport)?;

        let resp: Response = resp_value
            .dyn_into()
            .map_err(|_| StatsError::Transport("Not a Response".into()))?;
        if !resp.ok() {
            return Err(StatsError::Status(resp.status()));
        }

        let json = JsFuture::from(resp.json().map_err(decode)?)
            .await
            .map_err(decode)?;

        serde_wasm_bindgen::from_value(json).map_err(|e| StatsError::Decode(e.to_string()))
    }
}
