//! `window.localStorage` preference store.

use web_sys::Storage;

use crate::storage::PreferenceStore;

/// Accessing `localStorage` itself can throw (privacy mode, sandboxed
/// iframes), so the handle is looked up on every call.
pub struct LocalStorage;

fn local_storage() -> Option<Storage> {
    match web_sys::window()?.local_storage() {
        Ok(storage) => storage,
        Err(e) => {
            tracing::debug!("localStorage unavailable: {:?}", e);
            None
        }
    }
}

impl PreferenceStore for LocalStorage {
    fn read(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) -> bool {
        local_storage().is_some_and(|storage| storage.set_item(key, value).is_ok())
    }
}
