//! Paginated product listing against the catalog service.

use common::catalog::ProductPage;
use common::filter_codec;
use common::list_query::ProductListQuery;

use crate::api::catalog::remote_types::{RemoteProductPage, map_product};
use crate::remote::catalog_client::catalog_get_json;


/// Build the catalog service's query parameters from the fetch tuple.
/// The service takes 1-based page numbers; the `filters` parameter is
/// omitted entirely when no filter is active.
pub fn build_list_params(query: &ProductListQuery) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("categoryId", query.category_id.to_string()),
        ("pageNo", (query.page_number + 1).to_string()),
        ("pageSize", query.page_size.to_string()),
        ("sortBy", query.sort_by.as_str().to_string()),
        ("sortDir", query.sort_order.as_str().to_string()),
    ];
    if let Some(encoded) = filter_codec::encode(&query.selection) {
        params.push(("filters", encoded));
    }
    params
}

pub async fn list_products(query: ProductListQuery) -> anyhow::Result<ProductPage> {
    let params = build_list_params(&query);
    let remote: RemoteProductPage = catalog_get_json("/api/products", &params).await?;

    let page_number = query.page_number;
    Ok(ProductPage {
        query,
        content: remote.content.into_iter().map(map_product).collect(),
        total_elements: remote.total_elements,
        total_pages: remote.total_pages,
        page_number,
    })
}


#[cfg(test)]
mod tests {
    use super::*;
    use common::list_query::{SortBy, SortOrder};

    #[test]
    fn params_omit_filters_when_selection_is_empty() {
        let query = ProductListQuery::new(5);
        let params = build_list_params(&query);
        assert!(params.iter().all(|(k, _)| *k != "filters"));
        assert!(params.contains(&("categoryId", "5".to_string())));
        assert!(params.contains(&("pageNo", "1".to_string())));
    }

    #[test]
    fn params_carry_the_encoded_selection_and_one_based_page() {
        let mut query = ProductListQuery::new(5);
        query.selection.toggle(3, 7, "red");
        query.selection.toggle(3, 9, "blue");
        query.page_number = 2;
        query.sort_by = SortBy::Price;
        query.sort_order = SortOrder::Desc;

        let params = build_list_params(&query);
        assert!(params.contains(&("filters", "3[7%9]".to_string())));
        assert!(params.contains(&("pageNo", "3".to_string())));
        assert!(params.contains(&("sortBy", "price".to_string())));
        assert!(params.contains(&("sortDir", "desc".to_string())));
    }
}
