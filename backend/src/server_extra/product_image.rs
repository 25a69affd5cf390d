//! Raw axum route that streams product images through from the catalog
//! service, so the browser never talks to it directly.

use anyhow::Context;
use axum::{
    body::Body,
    extract::Path,
    response::{IntoResponse, Response},
};
use reqwest::StatusCode;
use tracing::info;

use crate::remote::catalog_client::{catalog_base_url, get_catalog_client};


async fn _product_image(file_name: String) -> anyhow::Result<impl IntoResponse> {
    info!("Streaming product image: {}", file_name);

    let url = format!("{}/api/images/{}", catalog_base_url(), file_name);
    let response = get_catalog_client()
        .get(&url)
        .send()
        .await
        .context("image request failed")?;
    if !response.status().is_success() {
        anyhow::bail!("catalog returned {} for image {}", response.status(), file_name);
    }

    let content_type = response
        .headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("application/octet-stream")
        .to_string();
    let headers = [("Content-Type".to_string(), content_type)];

    let body = Body::from_stream(response.bytes_stream());
    Ok((headers, body).into_response())
}

pub async fn product_image(Path(file_name): Path<String>) -> Response {
    match _product_image(file_name).await {
        Ok(response) => response.into_response(),
        Err(e) => {
            tracing::error!("product_image: request failed: {:#?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, Body::from(e.to_string())).into_response()
        }
    }
}
