//! Link descriptors returned by the REST API

use serde::{Deserialize, Serialize};

use crate::constants::LINK_TYPE;

/// Reference to another REST resource, resolved into a request on demand.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Link {
    #[serde(rename = "type", default)]
    pub link_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Link {
    pub fn new(uri: impl Into<String>) -> Self {
        Self { link_type: Some(LINK_TYPE.to_string()), uri: Some(uri.into()), title: None }
    }

    /// The URI of a well-formed link: type tag `Link` and a non-empty URI.
    pub fn target(&self) -> Option<&str> {
        match (self.link_type.as_deref(), self.uri.as_deref()) {
            (Some(LINK_TYPE), Some(uri)) if !uri.is_empty() => Some(uri),
            _ => None,
        }
    }
}
