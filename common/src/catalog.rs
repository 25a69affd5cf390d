//! Product catalog models returned by the catalog service.

use serde::{Deserialize, Serialize};

use crate::list_query::ProductListQuery;


/// A filterable product attribute, e.g. "colour" or "size".
///
/// Supplied by the catalog service per product; treated as read-only
/// reference data for the current result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variation {
    pub id: u64,
    pub name: String,
    pub category_id: u64,
    pub options: Vec<VariationOption>,
}

/// One concrete value of a [`Variation`], e.g. "red" or "XL".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariationOption {
    pub id: u64,
    pub value: String,
}

/// A purchasable variant of a product, carrying its own price and
/// discount percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemVariant {
    pub price: f64,
    pub discount_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub colour: String,
    pub images: Vec<String>,
    pub variations: Vec<Variation>,
    pub item_variants: Vec<ItemVariant>,
}

/// One page of filtered/sorted products, echoing back the query that
/// produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    pub query: ProductListQuery,
    pub content: Vec<Product>,
    pub total_elements: u64,
    pub total_pages: u64,
    pub page_number: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
}
