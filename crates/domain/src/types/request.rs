//! Request option and resolved request types

use http::header::{HeaderMap, HeaderName, HeaderValue};
use http::Method;
use serde_json::Value;

use crate::types::Captcha;

/// Per-call options of the request pipeline.
///
/// All fields are optional; `RequestOptions::default()` issues a plain call
/// with centralized error handling.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Extra query parameters, appended in order
    pub params: Vec<(String, String)>,
    /// Extra headers, overriding the defaults on collision
    pub headers: HeaderMap,
    /// Surface raw transport failures instead of routing them to the shared handler
    pub skip_api_error_handling: bool,
    /// Hold the execution barrier for the duration of the call
    pub run_exclusively: bool,
    pub captcha: Option<Captcha>,
    /// Append the persistent group id segment
    pub send_pgid: bool,
    /// Append the session group id segment
    pub send_spgid: bool,
}

impl RequestOptions {
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn skip_api_error_handling(mut self) -> Self {
        self.skip_api_error_handling = true;
        self
    }

    pub fn run_exclusively(mut self) -> Self {
        self.run_exclusively = true;
        self
    }

    pub fn captcha(mut self, captcha: Captcha) -> Self {
        self.captcha = Some(captcha);
        self
    }

    pub fn send_pgid(mut self) -> Self {
        self.send_pgid = true;
        self
    }

    pub fn send_spgid(mut self) -> Self {
        self.send_spgid = true;
        self
    }
}

/// Fully built request, ready for the transport.
#[derive(Debug, Clone)]
pub struct ResolvedRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub params: Vec<(String, String)>,
    pub body: Option<Value>,
}
