//! Category lookup for the results header.

use common::catalog::Category;

use crate::api::catalog::remote_types::RemoteCategory;
use crate::remote::catalog_client::catalog_get_json;


pub async fn get_category(category_id: u64) -> anyhow::Result<Category> {
    let remote: RemoteCategory =
        catalog_get_json(&format!("/api/categories/{category_id}"), &[]).await?;
    Ok(Category {
        id: remote.category_id,
        name: remote.category_name,
    })
}
