//! Price display math over a product's item variants.

use crate::catalog::ItemVariant;


pub fn discounted_price(variant: &ItemVariant) -> f64 {
    variant.price * (1.0 - variant.discount_percent / 100.0)
}

/// The lowest price across the product's variants after discounts, the
/// figure shown on the product card.
pub fn min_discounted_price(variants: &[ItemVariant]) -> Option<f64> {
    variants
        .iter()
        .map(discounted_price)
        .reduce(f64::min)
}

/// The highest undiscounted price, shown struck through as the "was"
/// price — but only when at least one variant actually carries a
/// discount.
pub fn max_original_price_if_discounted(variants: &[ItemVariant]) -> Option<f64> {
    if !variants.iter().any(|v| v.discount_percent > 0.0) {
        return None;
    }
    variants.iter().map(|v| v.price).reduce(f64::max)
}


#[cfg(test)]
mod tests {
    use super::*;

    fn variant(price: f64, discount_percent: f64) -> ItemVariant {
        ItemVariant { price, discount_percent }
    }

    #[test]
    fn min_reduce_applies_discounts_first() {
        // 100 at 50% off beats 60 at full price
        let variants = vec![variant(100.0, 50.0), variant(60.0, 0.0)];
        assert_eq!(min_discounted_price(&variants), Some(50.0));
    }

    #[test]
    fn no_variants_means_no_price() {
        assert_eq!(min_discounted_price(&[]), None);
        assert_eq!(max_original_price_if_discounted(&[]), None);
    }

    #[test]
    fn was_price_requires_a_discount() {
        let full_price = vec![variant(80.0, 0.0), variant(90.0, 0.0)];
        assert_eq!(max_original_price_if_discounted(&full_price), None);

        let discounted = vec![variant(80.0, 10.0), variant(90.0, 0.0)];
        assert_eq!(max_original_price_if_discounted(&discounted), Some(90.0));
    }
}
