//! Shared fixtures for pipeline integration tests.

use std::sync::Arc;
use std::time::Duration;

use shopfront_domain::ApiConfig;
use shopfront_infra::{ApiClient, ReportingErrorHandler, SessionContext};
use wiremock::MockServer;

/// Session pointing at `<mock>/rest` for API calls and `<mock>` for links.
pub fn session_for(server: &MockServer) -> Arc<SessionContext> {
    Arc::new(SessionContext::new(&api_config_for(server)))
}

pub fn api_config_for(server: &MockServer) -> ApiConfig {
    ApiConfig {
        rest_endpoint: format!("{}/rest", server.uri()),
        server_url: server.uri(),
        timeout_secs: 5,
        ..ApiConfig::default()
    }
}

/// Full stack: reqwest transport, live session, reporting error handler.
pub fn client_for(
    session: Arc<SessionContext>,
    handler: ReportingErrorHandler,
    timeout: Duration,
) -> ApiClient {
    ApiClient::builder()
        .config_provider(session)
        .error_handler(Arc::new(handler))
        .timeout(timeout)
        .build()
        .expect("client should build")
}
