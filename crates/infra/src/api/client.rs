//! Request pipeline
//!
//! Builds, synchronizes and dispatches every backend call of the storefront.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use shopfront_core::{resolve_headers, resolve_url, unpack_envelope, BarrierState, ConfigProvider, ExecutionBarrier};
use shopfront_domain::{ApiConfig, RequestOptions, ResolvedRequest};
use tracing::{debug, instrument};

use super::error_handler::{CommunicationErrorHandler, ReportingErrorHandler};
use super::errors::ApiError;
use super::transport::Transport;
use crate::http::HttpClient;

/// Single access point to the commerce backend.
///
/// Clones share the transport, the session state and the execution barrier.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    config: Arc<dyn ConfigProvider>,
    error_handler: Arc<dyn CommunicationErrorHandler>,
    barrier: ExecutionBarrier,
}

impl ApiClient {
    pub fn new(
        transport: Arc<dyn Transport>,
        config: Arc<dyn ConfigProvider>,
        error_handler: Arc<dyn CommunicationErrorHandler>,
    ) -> Self {
        Self { transport, config, error_handler, barrier: ExecutionBarrier::new() }
    }

    /// Create a builder for fluent configuration
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Whether an exclusive call is currently in flight.
    pub fn barrier_state(&self) -> BarrierState {
        self.barrier.state()
    }

    pub fn config_provider(&self) -> &Arc<dyn ConfigProvider> {
        &self.config
    }

    /// Execute a GET request
    ///
    /// # Errors
    ///
    /// Returns the handler's verdict on transport failures, or a local error
    /// when the request cannot be built or the body cannot be decoded
    #[instrument(skip(self, options), fields(path = %path))]
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        let value = self.execute(Method::GET, path, None, options).await?;
        decode(value)
    }

    /// Execute an OPTIONS request
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::get`]
    #[instrument(skip(self, options), fields(path = %path))]
    pub async fn options<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        let value = self.execute(Method::OPTIONS, path, None, options).await?;
        decode(value)
    }

    /// Execute a DELETE request
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::get`]
    #[instrument(skip(self, options), fields(path = %path))]
    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        let value = self.execute(Method::DELETE, path, None, options).await?;
        decode(value)
    }

    /// Execute a PUT request with a JSON body
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::get`]; additionally fails locally when the body
    /// cannot be serialized
    #[instrument(skip(self, body, options), fields(path = %path))]
    pub async fn put<B, R>(&self, path: &str, body: &B, options: RequestOptions) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        let body = encode(body)?;
        let value = self.execute(Method::PUT, path, Some(body), options).await?;
        decode(value)
    }

    /// Execute a PATCH request with a JSON body
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::put`]
    #[instrument(skip(self, body, options), fields(path = %path))]
    pub async fn patch<B, R>(&self, path: &str, body: &B, options: RequestOptions) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        let body = encode(body)?;
        let value = self.execute(Method::PATCH, path, Some(body), options).await?;
        decode(value)
    }

    /// Execute a POST request with a JSON body
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::put`]
    #[instrument(skip(self, body, options), fields(path = %path))]
    pub async fn post<B, R>(&self, path: &str, body: &B, options: RequestOptions) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        let body = encode(body)?;
        let value = self.execute(Method::POST, path, Some(body), options).await?;
        decode(value)
    }

    /// GET a collection envelope and return the items stored under `key`.
    ///
    /// A missing or empty collection yields an empty list.
    #[instrument(skip(self, options), fields(path = %path, key = %key))]
    pub async fn get_elements<T: DeserializeOwned>(
        &self,
        path: &str,
        key: &str,
        options: RequestOptions,
    ) -> Result<Vec<T>, ApiError> {
        let value = self.execute(Method::GET, path, None, options).await?;
        unpack_envelope(value, key).into_iter().map(decode).collect()
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        options: RequestOptions,
    ) -> Result<Value, ApiError> {
        if options.run_exclusively {
            return self.execute_exclusively(method, path, body, options).await;
        }

        self.barrier.wait_open().await;
        let request = self.resolve(method, path, body, &options)?;
        dispatch(
            self.transport.as_ref(),
            self.error_handler.as_ref(),
            request,
            options.skip_api_error_handling,
        )
        .await
    }

    /// Holds the barrier until the call's outcome is known. The dispatch runs
    /// on its own task so that a caller losing interest cannot open the
    /// barrier while the request is still in flight.
    async fn execute_exclusively(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        options: RequestOptions,
    ) -> Result<Value, ApiError> {
        let guard = self.barrier.acquire().await;
        debug!(%method, path, "exclusive call started");

        let request = self.resolve(method, path, body, &options)?;
        let transport = Arc::clone(&self.transport);
        let error_handler = Arc::clone(&self.error_handler);
        let skip = options.skip_api_error_handling;

        let task = tokio::spawn(async move {
            let outcome = dispatch(transport.as_ref(), error_handler.as_ref(), request, skip).await;
            drop(guard);
            outcome
        });

        task.await.map_err(|e| ApiError::Internal(format!("exclusive call did not complete: {e}")))?
    }

    fn resolve(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        options: &RequestOptions,
    ) -> Result<ResolvedRequest, ApiError> {
        let url = resolve_url(path, options, self.config.as_ref());
        let token = self.config.api_token();
        let headers = resolve_headers(options, token.as_deref())?;

        Ok(ResolvedRequest { method, url, headers, params: options.params.clone(), body })
    }
}

async fn dispatch(
    transport: &dyn Transport,
    error_handler: &dyn CommunicationErrorHandler,
    request: ResolvedRequest,
    skip_api_error_handling: bool,
) -> Result<Value, ApiError> {
    match transport.send(request).await {
        Ok(value) => Ok(value),
        Err(err) if skip_api_error_handling => {
            debug!(error = %err, "error handling skipped by caller");
            Err(err)
        }
        Err(err) => error_handler.handle(err).await,
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body)
        .map_err(|e| ApiError::InvalidRequest(format!("Failed to serialize body: {e}")))
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Builder for API client
#[derive(Default)]
pub struct ApiClientBuilder {
    transport: Option<Arc<dyn Transport>>,
    config: Option<Arc<dyn ConfigProvider>>,
    error_handler: Option<Arc<dyn CommunicationErrorHandler>>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ApiClientBuilder {
    /// Use a custom transport instead of the default [`HttpClient`]
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Set the source of endpoint, locale, token and group id
    pub fn config_provider(mut self, config: Arc<dyn ConfigProvider>) -> Self {
        self.config = Some(config);
        self
    }

    pub fn error_handler(mut self, handler: Arc<dyn CommunicationErrorHandler>) -> Self {
        self.error_handler = Some(handler);
        self
    }

    /// Take timeout and user agent of the default transport from `config`
    pub fn api_config(mut self, config: &ApiConfig) -> Self {
        self.timeout = Some(Duration::from_secs(config.timeout_secs));
        self.user_agent.clone_from(&config.user_agent);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the API client
    ///
    /// # Errors
    ///
    /// Returns error if no config provider is set or the default transport
    /// cannot be created
    pub fn build(self) -> Result<ApiClient, ApiError> {
        let config =
            self.config.ok_or_else(|| ApiError::Config("Config provider not set".to_string()))?;

        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => {
                let mut builder = HttpClient::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                if let Some(agent) = self.user_agent {
                    builder = builder.user_agent(agent);
                }
                Arc::new(builder.build()?)
            }
        };

        let error_handler = self
            .error_handler
            .unwrap_or_else(|| Arc::new(ReportingErrorHandler::new()));

        Ok(ApiClient::new(transport, config, error_handler))
    }
}
