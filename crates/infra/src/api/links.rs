//! Link descriptor resolution
//!
//! Follows `{ type: "Link", uri }` references returned by the backend.

use futures::future::try_join_all;
use serde::de::DeserializeOwned;
use shopfront_core::{link_target, link_url, valid_link_targets};
use shopfront_domain::{Link, RequestOptions};
use tracing::instrument;

use super::client::ApiClient;
use super::errors::ApiError;

impl ApiClient {
    /// GET the resource a link points at.
    ///
    /// # Errors
    ///
    /// `MalformedLink` without dispatching when the descriptor is not a
    /// well-formed link; otherwise as [`ApiClient::get`]
    #[instrument(skip(self, link), fields(uri = ?link.uri))]
    pub async fn resolve_link<T: DeserializeOwned>(&self, link: &Link) -> Result<T, ApiError> {
        let uri = link_target(link)?;
        let url = link_url(&self.config_provider().server_url(), uri);
        self.get(&url, RequestOptions::default()).await
    }

    /// GET every well-formed link concurrently. Results keep input order;
    /// malformed entries are skipped. Fails as soon as one call fails.
    #[instrument(skip(self, links), fields(count = links.len()))]
    pub async fn resolve_links<T: DeserializeOwned>(&self, links: &[Link]) -> Result<Vec<T>, ApiError> {
        let targets = valid_link_targets(links);
        if targets.is_empty() {
            return Ok(Vec::new());
        }

        let server_url = self.config_provider().server_url();
        let calls = targets.into_iter().map(|uri| {
            let url = link_url(&server_url, uri);
            async move { self.get::<T>(&url, RequestOptions::default()).await }
        });

        try_join_all(calls).await
    }
}
