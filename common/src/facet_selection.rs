//! The user's currently active filter choices, grouped by variation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};


/// The chosen options of a single variation. `option_ids` and
/// `display_names` are parallel lists; `display_names` may hold empty
/// strings when a selection was hydrated from the URL before the facet
/// catalog for the page had loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SelectedOptions {
    pub option_ids: Vec<u64>,
    pub display_names: Vec<String>,
}

/// Active filters keyed by variation id.
///
/// Invariant: an entry exists in the map if and only if its option-id
/// list is non-empty, so "has active filters" is `!is_empty()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FacetSelection(pub BTreeMap<u64, SelectedOptions>);

impl FacetSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, variation_id: u64, option_id: u64) -> bool {
        self.0
            .get(&variation_id)
            .map(|s| s.option_ids.contains(&option_id))
            .unwrap_or(false)
    }

    /// Add the option if absent, remove it if present. Removing the last
    /// option of a variation deletes the variation's entry entirely.
    pub fn toggle(&mut self, variation_id: u64, option_id: u64, display_name: &str) {
        if self.contains(variation_id, option_id) {
            self.remove(variation_id, option_id);
        } else {
            let entry = self.0.entry(variation_id).or_default();
            entry.option_ids.push(option_id);
            entry.display_names.push(display_name.to_string());
        }
    }

    /// Removal path shared with [`toggle`](Self::toggle), exposed
    /// separately for the active-filter chip dismiss affordance.
    pub fn remove(&mut self, variation_id: u64, option_id: u64) {
        let Some(entry) = self.0.get_mut(&variation_id) else {
            return;
        };
        if let Some(idx) = entry.option_ids.iter().position(|id| *id == option_id) {
            entry.option_ids.remove(idx);
            if idx < entry.display_names.len() {
                entry.display_names.remove(idx);
            }
        }
        if entry.option_ids.is_empty() {
            self.0.remove(&variation_id);
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Total number of selected options across all variations.
    pub fn option_count(&self) -> usize {
        self.0.values().map(|s| s.option_ids.len()).sum()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut s = FacetSelection::new();
        s.toggle(3, 7, "red");
        assert!(s.contains(3, 7));
        assert_eq!(s.0.get(&3).unwrap().display_names, vec!["red"]);

        s.toggle(3, 7, "red");
        assert!(!s.contains(3, 7));
    }

    #[test]
    fn toggle_pair_restores_prior_state() {
        let mut s = FacetSelection::new();
        s.toggle(3, 7, "red");
        s.toggle(5, 2, "M");
        let before = s.clone();

        s.toggle(3, 9, "blue");
        s.toggle(3, 9, "blue");
        assert_eq!(s, before);
    }

    #[test]
    fn removing_last_option_deletes_the_entry() {
        let mut s = FacetSelection::new();
        s.toggle(3, 7, "red");
        s.toggle(3, 9, "blue");

        s.remove(3, 7);
        assert!(s.0.contains_key(&3));
        assert_eq!(s.0.get(&3).unwrap().display_names, vec!["blue"]);

        s.remove(3, 9);
        assert!(!s.0.contains_key(&3));
        assert!(s.is_empty());
    }

    #[test]
    fn remove_unknown_option_is_a_no_op() {
        let mut s = FacetSelection::new();
        s.toggle(3, 7, "red");
        let before = s.clone();
        s.remove(3, 999);
        s.remove(999, 7);
        assert_eq!(s, before);
    }

    #[test]
    fn clear_empties_everything() {
        let mut s = FacetSelection::new();
        s.toggle(3, 7, "red");
        s.toggle(5, 2, "M");
        s.clear();
        assert!(s.is_empty());
        assert_eq!(s.option_count(), 0);
    }
}
