//! HTTP client plumbing for the catalog service.

use anyhow::Context;
use serde::de::DeserializeOwned;


pub fn catalog_base_url() -> String {
    std::env::var("CATALOG_API_URL").unwrap_or("http://localhost:8080".to_string())
}

pub fn get_catalog_client() -> reqwest::Client {
    reqwest::Client::new()
}

pub async fn catalog_get_json<T: DeserializeOwned + std::fmt::Debug>(
    path: &str,
    query_params: &[(&str, String)],
) -> anyhow::Result<T> {
    let url = format!("{}{}", catalog_base_url(), path);
    tracing::info!("catalog GET {} {:?}", url, query_params);

    let response = get_catalog_client()
        .get(&url)
        .query(query_params)
        .send()
        .await
        .context("catalog request failed")?;
    let status = response.status();
    if !status.is_success() {
        anyhow::bail!("catalog returned {} for {}", status, url);
    }
    let parsed = response
        .json::<T>()
        .await
        .context("failed to parse catalog response")?;
    Ok(parsed)
}
