//! Thin wrapper over `localStorage`.
//!
//! Storage can be absent (file:// contexts, privacy modes) or throw on write
//! (quota). Neither may affect timer correctness, so reads degrade to `None`
//! and writes log a warning and continue.

use gloo_utils::window;
use log::warn;
use web_sys::Storage;

fn local_storage() -> Option<Storage> {
    window().local_storage().ok().flatten()
}

pub fn get(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

pub fn set(key: &str, value: &str) {
    let Some(store) = local_storage() else {
        warn!("localStorage unavailable, not persisting {}", key);
        return;
    };
    if store.set_item(key, value).is_err() {
        warn!("failed to persist {}={}", key, value);
    }
}

/// Read a persisted non-negative integer, tolerating absence and garbage.
pub fn get_u64(key: &str) -> Option<u64> {
    get(key)?.trim().parse().ok()
}
