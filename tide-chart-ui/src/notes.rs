//! Per-day free-text overrides kept in `window.localStorage`.
//!
//! These are the only data persisted by the app. Keys are namespaced by
//! date; saving an empty note removes the key. Storage failures (private
//! browsing, quota) degrade to no persistence, never to an error state.

use chrono::NaiveDate;
use web_sys::Storage;

const KEY_PREFIX: &str = "tide-note-";

fn storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn key_for(date: NaiveDate) -> String {
    format!("{}{}", KEY_PREFIX, date.format("%Y-%m-%d"))
}

/// Load the saved note for a day, if any.
pub fn load_note(date: NaiveDate) -> Option<String> {
    storage()?.get_item(&key_for(date)).ok().flatten()
}

/// Save (or, for empty text, remove) the note for a day.
pub fn save_note(date: NaiveDate, text: &str) {
    let Some(storage) = storage() else {
        log::warn!("localStorage unavailable; note not persisted");
        return;
    };
    let key = key_for(date);
    let result = if text.trim().is_empty() {
        storage.remove_item(&key)
    } else {
        storage.set_item(&key, text)
    };
    if result.is_err() {
        log::warn!("failed to persist note for {}", date);
    }
}
