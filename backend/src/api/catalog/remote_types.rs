//! Wire types for the catalog service's camelCase JSON payloads, plus
//! the mapping into the `common` models.

use common::catalog::{ItemVariant, Product, Variation, VariationOption};
use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteProductPage {
    pub content: Vec<RemoteProduct>,
    pub total_elements: u64,
    pub total_pages: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteProduct {
    pub product_id: u64,
    pub product_name: String,
    #[serde(default)]
    pub colour: String,
    #[serde(default)]
    pub product_images: Vec<String>,
    #[serde(default)]
    pub variations: Vec<RemoteVariation>,
    #[serde(default)]
    pub product_item_requests: Vec<RemoteProductItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteVariation {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub category_id: u64,
    #[serde(default)]
    pub options: Vec<RemoteVariationOption>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteVariationOption {
    pub id: u64,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteProductItem {
    pub price: f64,
    #[serde(default)]
    pub discount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteCategory {
    pub category_id: u64,
    pub category_name: String,
}


pub fn map_variation(remote: RemoteVariation) -> Variation {
    Variation {
        id: remote.id,
        name: remote.name,
        category_id: remote.category_id,
        options: remote
            .options
            .into_iter()
            .map(|o| VariationOption { id: o.id, value: o.value })
            .collect(),
    }
}

pub fn map_product(remote: RemoteProduct) -> Product {
    Product {
        id: remote.product_id,
        name: remote.product_name,
        colour: remote.colour,
        images: remote.product_images,
        variations: remote.variations.into_iter().map(map_variation).collect(),
        item_variants: remote
            .product_item_requests
            .into_iter()
            .map(|i| ItemVariant { price: i.price, discount_percent: i.discount })
            .collect(),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_product_json_maps_into_common_types() {
        let payload = serde_json::json!({
            "productId": 12,
            "productName": "Linen Shirt",
            "colour": "white",
            "productImages": ["shirt-front.jpg"],
            "variations": [{
                "id": 3,
                "name": "size",
                "categoryId": 1,
                "options": [{"id": 7, "value": "M"}, {"id": 9, "value": "L"}]
            }],
            "productItemRequests": [{"price": 49.0, "discount": 10.0}]
        });
        let remote: RemoteProduct = serde_json::from_value(payload).unwrap();
        let product = map_product(remote);

        assert_eq!(product.id, 12);
        assert_eq!(product.name, "Linen Shirt");
        assert_eq!(product.variations[0].options[1].value, "L");
        assert_eq!(product.item_variants[0].discount_percent, 10.0);
    }

    #[test]
    fn missing_optional_fields_default() {
        let payload = serde_json::json!({
            "productId": 1,
            "productName": "Plain Tee"
        });
        let remote: RemoteProduct = serde_json::from_value(payload).unwrap();
        let product = map_product(remote);
        assert!(product.images.is_empty());
        assert!(product.variations.is_empty());
        assert!(product.item_variants.is_empty());
    }
}
