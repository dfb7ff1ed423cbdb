//! Fetch the top-level category tree of a storefront backend.
//!
//! ```sh
//! SHOPFRONT_REST_ENDPOINT=https://shop.example.com/INTERSHOP/rest/WFS/inSPIRED-inTRONICS-Site/- \
//! SHOPFRONT_SERVER_URL=https://shop.example.com/INTERSHOP \
//! cargo run -p shopfront-infra --example fetch_categories
//! ```

use std::sync::Arc;

use serde_json::Value;
use shopfront_domain::constants::DEFAULT_ENVELOPE_KEY;
use shopfront_domain::RequestOptions;
use shopfront_infra::{config, observability, ApiClient, SessionContext};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    observability::init_tracing(false)?;

    let api_config = config::load()?;
    let session = Arc::new(SessionContext::new(&api_config));
    let client = ApiClient::builder().api_config(&api_config).config_provider(session).build()?;

    let categories: Vec<Value> = client
        .get_elements("categories", DEFAULT_ENVELOPE_KEY, RequestOptions::default().param("view", "tree"))
        .await?;

    for category in &categories {
        let id = category.get("id").and_then(Value::as_str).unwrap_or("?");
        let name = category.get("name").and_then(Value::as_str).unwrap_or("?");
        tracing::info!(%id, %name, "category");
    }
    tracing::info!(count = categories.len(), "categories fetched");

    Ok(())
}
