//! Client API calls for catalog endpoints.

use common::catalog::{Category, ProductPage, Variation};
use common::facet_selection::FacetSelection;
use common::list_query::ProductListQuery;
use dioxus::prelude::*;




#[server]
pub async fn list_products(query: ProductListQuery) -> Result<ProductPage, ServerFnError> {
    let x = backend::api::catalog::list_products(query).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn category_filters(category_id: u64, selection: FacetSelection) -> Result<Vec<Variation>, ServerFnError> {
    let x = backend::api::catalog::category_filters(category_id, selection).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn get_category(category_id: u64) -> Result<Category, ServerFnError> {
    let x = backend::api::catalog::get_category(category_id).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
