//! Storefront API access layer
//!
//! Every backend call of the storefront funnels through [`ApiClient`]: URL
//! and header resolution, the execution barrier, dispatch through a
//! [`Transport`], and centralized error interception.
//!
//! # Architecture
//!
//! - Transport and error handler are injected as trait objects
//! - Live endpoint/locale/token/group id read through `ConfigProvider`
//! - One execution barrier per client instance
//! - No retries; failures surface once

pub mod client;
pub mod error_handler;
pub mod errors;
pub mod links;
pub mod session;
pub mod transport;

#[cfg(test)]
mod test_support;

pub use client::{ApiClient, ApiClientBuilder};
pub use error_handler::{CommunicationErrorHandler, CommunicationNotice, ReportingErrorHandler};
pub use errors::{ApiError, ApiErrorCategory};
pub use session::SessionContext;
pub use transport::Transport;
