//! Derives the displayable facet set from the currently loaded product
//! page.
//!
//! The catalog is recomputed in full on every successful page fetch and
//! never merged across pages, so the visible facets always reflect only
//! the page on screen.

use std::cmp::Ordering;

use crate::catalog::{Product, Variation, VariationOption};


/// Union the variations of every product on the page, keyed by variation
/// name while accumulating. Duplicate options (by id) collapse to one
/// entry. The result is sorted by variation id ascending, each option
/// list by option id ascending.
pub fn aggregate_facets(products: &[Product]) -> Vec<Variation> {
    let mut catalog: Vec<Variation> = Vec::new();
    for product in products {
        for variation in &product.variations {
            match catalog.iter_mut().find(|v| v.name == variation.name) {
                None => catalog.push(variation.clone()),
                Some(existing) => {
                    for option in &variation.options {
                        // page sizes are bounded, linear scan is fine
                        if !existing.options.iter().any(|o| o.id == option.id) {
                            existing.options.push(option.clone());
                        }
                    }
                }
            }
        }
    }
    catalog.sort_by_key(|v| v.id);
    for variation in catalog.iter_mut() {
        variation.options.sort_by_key(|o| o.id);
    }
    catalog
}

// garment sizes sort by this order, not alphabetically
const SIZE_ORDER: [&str; 6] = ["XS", "S", "M", "L", "XL", "XXL"];

fn size_rank(value: &str) -> Option<usize> {
    SIZE_ORDER.iter().position(|s| s.eq_ignore_ascii_case(value))
}

/// Display-order comparator for option values: the fixed garment-size
/// ordering wins when both values belong to it, then numeric comparison
/// when both parse as numbers, then lexicographic for plain strings.
/// Number-vs-string comparisons report equality so a stable sort leaves
/// their relative order alone.
pub fn compare_option_values(a: &str, b: &str) -> Ordering {
    if let (Some(ra), Some(rb)) = (size_rank(a), size_rank(b)) {
        return ra.cmp(&rb);
    }
    match (a.parse::<f64>(), b.parse::<f64>()) {
        (Ok(na), Ok(nb)) => na.partial_cmp(&nb).unwrap_or(Ordering::Equal),
        (Err(_), Err(_)) => a.cmp(b),
        _ => Ordering::Equal,
    }
}

/// Stable sort of a variation's options into display order.
pub fn sort_options_for_display(options: &mut [VariationOption]) {
    options.sort_by(|a, b| compare_option_values(&a.value, &b.value));
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ItemVariant;

    fn product(variations: Vec<Variation>) -> Product {
        Product {
            id: 1,
            name: "shirt".to_string(),
            colour: "red".to_string(),
            images: vec![],
            variations,
            item_variants: vec![ItemVariant { price: 10.0, discount_percent: 0.0 }],
        }
    }

    fn variation(id: u64, name: &str, option_ids: &[u64]) -> Variation {
        Variation {
            id,
            name: name.to_string(),
            category_id: 1,
            options: option_ids
                .iter()
                .map(|id| VariationOption { id: *id, value: format!("v{id}") })
                .collect(),
        }
    }

    #[test]
    fn shared_variation_names_union_their_options() {
        let products = vec![
            product(vec![variation(2, "size", &[5, 3])]),
            product(vec![variation(2, "size", &[3, 8])]),
        ];
        let catalog = aggregate_facets(&products);
        assert_eq!(catalog.len(), 1);
        let ids = catalog[0].options.iter().map(|o| o.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![3, 5, 8]);
    }

    #[test]
    fn catalog_sorts_variations_by_id() {
        let products = vec![
            product(vec![variation(9, "size", &[1])]),
            product(vec![variation(2, "colour", &[4])]),
        ];
        let catalog = aggregate_facets(&products);
        assert_eq!(catalog.iter().map(|v| v.id).collect::<Vec<_>>(), vec![2, 9]);
    }

    #[test]
    fn empty_page_yields_empty_catalog() {
        assert!(aggregate_facets(&[]).is_empty());
    }

    #[test]
    fn garment_sizes_sort_by_fixed_order() {
        let mut options = ["M", "XS", "L"]
            .iter()
            .enumerate()
            .map(|(i, v)| VariationOption { id: i as u64, value: v.to_string() })
            .collect::<Vec<_>>();
        sort_options_for_display(&mut options);
        let values = options.iter().map(|o| o.value.as_str()).collect::<Vec<_>>();
        assert_eq!(values, vec!["XS", "M", "L"]);
    }

    #[test]
    fn numeric_values_sort_numerically() {
        let mut options = ["10", "2"]
            .iter()
            .enumerate()
            .map(|(i, v)| VariationOption { id: i as u64, value: v.to_string() })
            .collect::<Vec<_>>();
        sort_options_for_display(&mut options);
        let values = options.iter().map(|o| o.value.as_str()).collect::<Vec<_>>();
        assert_eq!(values, vec!["2", "10"]);
    }

    #[test]
    fn plain_strings_sort_lexicographically() {
        assert_eq!(compare_option_values("cotton", "wool"), Ordering::Less);
    }

    #[test]
    fn mixed_comparisons_keep_relative_order() {
        assert_eq!(compare_option_values("XS", "10"), Ordering::Equal);
        assert_eq!(compare_option_values("cotton", "10"), Ordering::Equal);
    }

    #[test]
    fn size_comparison_ignores_case() {
        assert_eq!(compare_option_values("xs", "M"), Ordering::Less);
    }
}
