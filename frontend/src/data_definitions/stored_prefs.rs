//! Durable client-local view preferences.
//!
//! Page size and sort settings survive reloads through `localStorage`.
//! Off wasm (server-side rendering) the accessors degrade to defaults
//! and no-ops, since there is no browser storage to touch.

use serde::{Deserialize, Serialize};

use common::list_const::{DEFAULT_PAGE_SIZE, PAGE_SIZES};
use common::list_query::{SortBy, SortOrder};

const STORAGE_KEY: &str = "storefront_list_prefs";


#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListPrefs {
    pub page_size: u64,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
}

impl Default for ListPrefs {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            sort_by: SortBy::default(),
            sort_order: SortOrder::default(),
        }
    }
}

impl ListPrefs {
    /// Stored values from an older session may no longer be offered.
    fn sanitized(mut self) -> Self {
        if !PAGE_SIZES.contains(&self.page_size) {
            self.page_size = DEFAULT_PAGE_SIZE;
        }
        self
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(target_arch = "wasm32")]
pub fn load_list_prefs() -> ListPrefs {
    let Some(storage) = local_storage() else {
        return ListPrefs::default();
    };
    storage
        .get_item(STORAGE_KEY)
        .ok()
        .flatten()
        .and_then(|raw| serde_json::from_str::<ListPrefs>(&raw).ok())
        .unwrap_or_default()
        .sanitized()
}

#[cfg(target_arch = "wasm32")]
pub fn save_list_prefs(prefs: ListPrefs) {
    let Some(storage) = local_storage() else {
        return;
    };
    if let Ok(raw) = serde_json::to_string(&prefs) {
        let _r = storage.set_item(STORAGE_KEY, &raw);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_list_prefs() -> ListPrefs {
    ListPrefs::default().sanitized()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_list_prefs(_prefs: ListPrefs) {}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_page_size_falls_back_to_default() {
        let prefs = ListPrefs { page_size: 17, ..Default::default() };
        assert_eq!(prefs.sanitized().page_size, DEFAULT_PAGE_SIZE);

        let prefs = ListPrefs { page_size: 36, ..Default::default() };
        assert_eq!(prefs.sanitized().page_size, 36);
    }

    #[test]
    fn prefs_round_trip_through_json() {
        let prefs = ListPrefs {
            page_size: 36,
            sort_by: SortBy::Price,
            sort_order: SortOrder::Desc,
        };
        let raw = serde_json::to_string(&prefs).unwrap();
        let parsed: ListPrefs = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, prefs);
    }
}
