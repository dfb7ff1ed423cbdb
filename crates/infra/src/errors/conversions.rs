//! Conversions from domain and transport errors into [`ApiError`].

use std::error::Error as _;

use reqwest::Error as HttpError;
use shopfront_domain::ShopfrontError;

use crate::api::ApiError;

/* -------------------------------------------------------------------------- */
/* ShopfrontError → ApiError */
/* -------------------------------------------------------------------------- */

impl From<ShopfrontError> for ApiError {
    fn from(err: ShopfrontError) -> Self {
        match err {
            ShopfrontError::Config(message) => Self::Config(message),
            ShopfrontError::MalformedLink(message) => Self::MalformedLink(message),
            ShopfrontError::InvalidInput(message) => Self::InvalidRequest(message),
            ShopfrontError::Network(message) => Self::Network(message),
            ShopfrontError::Internal(message) => Self::Internal(message),
        }
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → ApiError */
/* -------------------------------------------------------------------------- */

impl From<HttpError> for ApiError {
    fn from(err: HttpError) -> Self {
        if err.is_builder() {
            return Self::InvalidRequest(format!("failed to build http request: {err}"));
        }
        if err.is_timeout() {
            return Self::Network(format!("http request timed out: {err}"));
        }
        if err.is_connect() || err.is_request() || err.is_body() {
            return Self::Network(format!("http request failed: {err}"));
        }
        // reqwest also reports body stream failures as decode errors
        if err.is_decode() && carries_json_error(&err) {
            return Self::Decode(err.to_string());
        }
        if let Some(status) = err.status() {
            return Self::Server(format!("http status {status}: {err}"));
        }
        Self::Network(format!("http request failed: {err}"))
    }
}

fn carries_json_error(err: &HttpError) -> bool {
    let mut source = err.source();
    while let Some(inner) = source {
        if inner.is::<serde_json::Error>() {
            return true;
        }
        source = inner.source();
    }
    false
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[test]
    fn test_domain_errors_keep_their_kind() {
        assert!(matches!(
            ApiError::from(ShopfrontError::MalformedLink("x".into())),
            ApiError::MalformedLink(_)
        ));
        assert!(matches!(
            ApiError::from(ShopfrontError::InvalidInput("x".into())),
            ApiError::InvalidRequest(_)
        ));
        assert!(matches!(ApiError::from(ShopfrontError::Config("x".into())), ApiError::Config(_)));
    }

    #[tokio::test]
    async fn test_connection_refused_maps_to_network() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = reqwest::get(format!("http://{addr}")).await.unwrap_err();
        let api_err = ApiError::from(err);
        assert!(matches!(api_err, ApiError::Network(_)), "got {api_err:?}");
    }

    #[tokio::test]
    async fn test_invalid_json_body_maps_to_decode() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let response = reqwest::get(server.uri()).await.unwrap();
        let err = response.json::<serde_json::Value>().await.unwrap_err();
        let api_err = ApiError::from(err);
        assert!(matches!(api_err, ApiError::Decode(_)), "got {api_err:?}");
    }
}
