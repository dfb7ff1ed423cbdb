//! Shared communication-error handling
//!
//! Transport failures of every call that does not opt out are routed to one
//! [`CommunicationErrorHandler`]. The handler may recover a substitute body
//! or re-signal the failure; whatever it returns becomes the call's outcome.

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::broadcast;
use tracing::{error, warn};

use super::errors::{ApiError, ApiErrorCategory};

const NOTICE_CAPACITY: usize = 64;

/// Central sink for transport failures.
#[async_trait]
pub trait CommunicationErrorHandler: Send + Sync {
    /// Handle a failed call.
    ///
    /// `Ok` substitutes the given body for the failed response; `Err`
    /// propagates (possibly a transformed) error to the caller.
    async fn handle(&self, error: ApiError) -> Result<Value, ApiError>;
}

/// Backend availability problem observed by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommunicationNotice {
    pub category: ApiErrorCategory,
    pub message: String,
}

/// Default handler: logs every failure, announces server and network
/// failures to subscribers, and re-signals the original error.
#[derive(Debug, Clone)]
pub struct ReportingErrorHandler {
    notices: broadcast::Sender<CommunicationNotice>,
}

impl ReportingErrorHandler {
    pub fn new() -> Self {
        let (notices, _) = broadcast::channel(NOTICE_CAPACITY);
        Self { notices }
    }

    /// Receive a [`CommunicationNotice`] for every server or network failure
    /// handled after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<CommunicationNotice> {
        self.notices.subscribe()
    }
}

impl Default for ReportingErrorHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommunicationErrorHandler for ReportingErrorHandler {
    async fn handle(&self, error: ApiError) -> Result<Value, ApiError> {
        let category = error.category();

        if error.is_communication_failure() {
            error!(?category, error = %error, "backend communication failed");
            // no subscribers is not an error
            let _ = self.notices.send(CommunicationNotice { category, message: error.to_string() });
        } else {
            warn!(?category, error = %error, "backend call failed");
        }

        Err(error)
    }
}
