//! Available-filters endpoint for a category.

use common::catalog::Variation;
use common::facet_selection::FacetSelection;
use common::filter_codec;

use crate::api::catalog::remote_types::{RemoteVariation, map_variation};
use crate::remote::catalog_client::catalog_get_json;


/// Fetch the variations the catalog service considers filterable for the
/// category, scoped by the currently active filters.
pub async fn category_filters(
    category_id: u64,
    selection: FacetSelection,
) -> anyhow::Result<Vec<Variation>> {
    let mut params = vec![("categoryId", category_id.to_string())];
    if let Some(encoded) = filter_codec::encode(&selection) {
        params.push(("filters", encoded));
    }
    let remote: Vec<RemoteVariation> =
        catalog_get_json("/api/products/filters", &params).await?;
    Ok(remote.into_iter().map(map_variation).collect())
}
