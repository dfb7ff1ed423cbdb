//! Configuration structures

use serde::{Deserialize, Serialize};

use crate::types::Locale;

/// Static configuration of the API access layer.
///
/// Values here seed the live session state at startup; the endpoint and
/// locale can change at runtime afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// REST base endpoint, e.g. `https://shop.example.com/INTERSHOP/rest/WFS/inSPIRED-inTRONICS-Site/-`
    pub rest_endpoint: String,
    /// Server root used to resolve link descriptors
    pub server_url: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub user_agent: Option<String>,
    /// Locale applied until the storefront selects another one
    #[serde(default)]
    pub locale: Option<Locale>,
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            rest_endpoint: "http://localhost:8081/INTERSHOP/rest/WFS/inSPIRED-inTRONICS-Site/-"
                .to_string(),
            server_url: "http://localhost:8081/INTERSHOP".to_string(),
            timeout_secs: default_timeout_secs(),
            user_agent: None,
            locale: None,
        }
    }
}
