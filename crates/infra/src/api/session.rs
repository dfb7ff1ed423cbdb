//! Live session state
//!
//! Holds the values the request pipeline reads at build time. Storefront
//! collaborators (locale switcher, login, session bootstrap) update them at
//! runtime; the pipeline only reads.

use std::fmt;

use parking_lot::RwLock;
use shopfront_core::ConfigProvider;
use shopfront_domain::{ApiConfig, Locale};
use tracing::debug;

#[derive(Clone)]
struct SessionState {
    rest_endpoint: String,
    server_url: String,
    locale: Option<Locale>,
    api_token: Option<String>,
    group_id: Option<String>,
}

/// Thread-safe, runtime-updatable implementation of [`ConfigProvider`].
pub struct SessionContext {
    state: RwLock<SessionState>,
}

impl SessionContext {
    /// Seed the session from static configuration. No customer is logged in.
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            state: RwLock::new(SessionState {
                rest_endpoint: config.rest_endpoint.trim_end_matches('/').to_string(),
                server_url: config.server_url.trim_end_matches('/').to_string(),
                locale: config.locale.clone(),
                api_token: None,
                group_id: None,
            }),
        }
    }

    pub fn set_rest_endpoint(&self, endpoint: impl Into<String>) {
        let endpoint: String = endpoint.into();
        debug!(endpoint = %endpoint, "REST endpoint changed");
        self.state.write().rest_endpoint = endpoint.trim_end_matches('/').to_string();
    }

    pub fn set_server_url(&self, server_url: impl Into<String>) {
        let server_url: String = server_url.into();
        self.state.write().server_url = server_url.trim_end_matches('/').to_string();
    }

    pub fn set_locale(&self, locale: Option<Locale>) {
        debug!(?locale, "locale changed");
        self.state.write().locale = locale;
    }

    pub fn set_api_token(&self, token: Option<String>) {
        debug!(present = token.is_some(), "API token changed");
        self.state.write().api_token = token;
    }

    pub fn set_group_id(&self, group_id: Option<String>) {
        self.state.write().group_id = group_id;
    }

    /// Forget the customer session: API token and group id.
    pub fn clear_customer(&self) {
        let mut state = self.state.write();
        state.api_token = None;
        state.group_id = None;
    }
}

impl fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read();
        f.debug_struct("SessionContext")
            .field("rest_endpoint", &state.rest_endpoint)
            .field("server_url", &state.server_url)
            .field("locale", &state.locale)
            .field("api_token", &state.api_token.as_ref().map(|_| "[REDACTED]"))
            .field("group_id", &state.group_id)
            .finish()
    }
}

impl ConfigProvider for SessionContext {
    fn rest_endpoint(&self) -> String {
        self.state.read().rest_endpoint.clone()
    }

    fn server_url(&self) -> String {
        self.state.read().server_url.clone()
    }

    fn locale(&self) -> Option<Locale> {
        self.state.read().locale.clone()
    }

    fn api_token(&self) -> Option<String> {
        self.state.read().api_token.clone()
    }

    fn group_id(&self) -> Option<String> {
        self.state.read().group_id.clone()
    }
}
