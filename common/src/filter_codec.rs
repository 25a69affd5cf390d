//! Compact query-string encoding of a [`FacetSelection`].
//!
//! Format: `<variationId>[<optionId>%<optionId>...]` per variation,
//! entries joined with `~`. Example: `3[7%9]~5[2]`. The empty selection
//! encodes to nothing at all, so the `filters` URL parameter is removed
//! rather than written as an empty string.

use crate::catalog::Variation;
use crate::facet_selection::{FacetSelection, SelectedOptions};


pub fn encode(selection: &FacetSelection) -> Option<String> {
    if selection.is_empty() {
        return None;
    }
    let entries = selection
        .0
        .iter()
        .map(|(variation_id, selected)| {
            let ids = selected
                .option_ids
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join("%");
            format!("{variation_id}[{ids}]")
        })
        .collect::<Vec<_>>();
    Some(entries.join("~"))
}

/// Best-effort decode. Malformed tokens (missing brackets, non-numeric
/// ids) are dropped silently; they can never match a real option, so
/// skipping them is equivalent to the ids being inert. Display names are
/// left empty, to be filled in by [`resolve_display_names`] once the
/// facet catalog for the page is available.
pub fn decode(encoded: &str) -> FacetSelection {
    let mut selection = FacetSelection::new();
    for token in encoded.split('~') {
        let Some((variation_part, rest)) = token.split_once('[') else {
            continue;
        };
        let Some(options_part) = rest.strip_suffix(']') else {
            continue;
        };
        let Ok(variation_id) = variation_part.parse::<u64>() else {
            continue;
        };
        let option_ids = options_part
            .split('%')
            .filter_map(|id| id.parse::<u64>().ok())
            .collect::<Vec<_>>();
        if option_ids.is_empty() {
            continue;
        }
        let display_names = vec![String::new(); option_ids.len()];
        selection.0.insert(
            variation_id,
            SelectedOptions {
                option_ids,
                display_names,
            },
        );
    }
    selection
}

/// Replace the display names of a hydrated selection with the option
/// values found in the given facet catalog. Options not present in the
/// catalog keep an empty name (the catalog only reflects the currently
/// loaded page, so a stale URL can reference options it cannot name).
pub fn resolve_display_names(selection: &mut FacetSelection, catalog: &[Variation]) {
    for (variation_id, selected) in selection.0.iter_mut() {
        let variation = catalog.iter().find(|v| v.id == *variation_id);
        selected.display_names = selected
            .option_ids
            .iter()
            .map(|option_id| {
                variation
                    .and_then(|v| v.options.iter().find(|o| o.id == *option_id))
                    .map(|o| o.value.clone())
                    .unwrap_or_default()
            })
            .collect();
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::VariationOption;

    #[test]
    fn single_selection_encodes_to_bracketed_token() {
        let mut s = FacetSelection::new();
        s.toggle(3, 7, "red");
        assert_eq!(encode(&s).as_deref(), Some("3[7]"));

        s.toggle(3, 9, "blue");
        assert_eq!(encode(&s).as_deref(), Some("3[7%9]"));
    }

    #[test]
    fn multiple_variations_join_with_tilde() {
        let mut s = FacetSelection::new();
        s.toggle(3, 7, "red");
        s.toggle(5, 2, "M");
        s.toggle(5, 4, "L");
        assert_eq!(encode(&s).as_deref(), Some("3[7]~5[2%4]"));
    }

    #[test]
    fn empty_selection_encodes_to_none() {
        assert_eq!(encode(&FacetSelection::new()), None);
    }

    #[test]
    fn decode_inverts_encode_up_to_display_names() {
        let mut s = FacetSelection::new();
        s.toggle(3, 7, "red");
        s.toggle(3, 9, "blue");
        s.toggle(5, 2, "M");

        let decoded = decode(&encode(&s).unwrap());
        assert_eq!(decoded.0.keys().collect::<Vec<_>>(), s.0.keys().collect::<Vec<_>>());
        for (variation_id, selected) in s.0.iter() {
            assert_eq!(decoded.0[variation_id].option_ids, selected.option_ids);
        }
        // names come back empty until resolved against a catalog
        assert!(decoded.0[&3].display_names.iter().all(|n| n.is_empty()));
    }

    #[test]
    fn malformed_tokens_are_dropped() {
        assert!(decode("garbage").is_empty());
        assert!(decode("3[").is_empty());
        assert!(decode("x[7]").is_empty());
        assert!(decode("3[a%b]").is_empty());

        // a valid token survives its malformed neighbors
        let s = decode("garbage~3[7%x]~5[2]");
        assert_eq!(s.0[&3].option_ids, vec![7]);
        assert_eq!(s.0[&5].option_ids, vec![2]);
    }

    #[test]
    fn display_names_resolve_against_the_catalog() {
        let catalog = vec![Variation {
            id: 3,
            name: "colour".to_string(),
            category_id: 1,
            options: vec![
                VariationOption { id: 7, value: "red".to_string() },
                VariationOption { id: 9, value: "blue".to_string() },
            ],
        }];
        let mut s = decode("3[7%9%11]");
        resolve_display_names(&mut s, &catalog);
        assert_eq!(s.0[&3].display_names, vec!["red", "blue", ""]);
    }
}
