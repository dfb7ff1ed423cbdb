//! Transport port

use async_trait::async_trait;
use serde_json::Value;
use shopfront_domain::ResolvedRequest;

use super::errors::ApiError;

/// Sends a fully resolved request and returns its JSON body.
///
/// Implementations report non-success statuses as errors and return
/// `Value::Null` for empty bodies. They must not retry.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ResolvedRequest) -> Result<Value, ApiError>;
}
