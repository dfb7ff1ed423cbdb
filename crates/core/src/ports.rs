//! Port interfaces for live configuration

use shopfront_domain::Locale;

/// Read access to the configuration values collaborators keep up to date.
///
/// Queried synchronously every time a request is built, so implementations
/// must be cheap and must never block on I/O.
pub trait ConfigProvider: Send + Sync {
    /// Current REST base endpoint
    fn rest_endpoint(&self) -> String;

    /// Current server root used to resolve link descriptors
    fn server_url(&self) -> String;

    /// Currently selected locale, if any
    fn locale(&self) -> Option<Locale>;

    /// API token of the logged-in customer, if any
    fn api_token(&self) -> Option<String>;

    /// Persistent/session group identifier, if the backend assigned one
    fn group_id(&self) -> Option<String>;
}
