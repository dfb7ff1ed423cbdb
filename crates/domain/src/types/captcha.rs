//! Captcha credentials attached to protected calls

use serde::{Deserialize, Serialize};

/// Token produced by the captcha widget.
///
/// reCAPTCHA v3 tokens come with the action they were issued for; v2 tokens
/// carry no action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Captcha {
    pub captcha: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captcha_action: Option<String>,
}

impl Captcha {
    pub fn v2(token: impl Into<String>) -> Self {
        Self { captcha: token.into(), captcha_action: None }
    }

    pub fn v3(token: impl Into<String>, action: impl Into<String>) -> Self {
        Self { captcha: token.into(), captcha_action: Some(action.into()) }
    }
}
