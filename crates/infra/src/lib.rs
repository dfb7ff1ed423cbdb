//! # Shopfront Infrastructure
//!
//! Infrastructure implementations behind the storefront's API access layer.
//!
//! This crate contains:
//! - The request pipeline ([`ApiClient`]) every backend call goes through
//! - A reqwest-based HTTP transport
//! - Live session state implementing the core `ConfigProvider` port
//! - Configuration loading and tracing setup
//!
//! ## Architecture
//! - Implements traits defined in `shopfront-core`
//! - Depends on `shopfront-domain` and `shopfront-core`
//! - Contains all "impure" code (network, environment, files)

pub mod api;
pub mod config;
pub mod errors;
pub mod http;
pub mod observability;

// Re-export commonly used items
pub use api::{
    ApiClient, ApiClientBuilder, ApiError, ApiErrorCategory, CommunicationErrorHandler,
    CommunicationNotice, ReportingErrorHandler, SessionContext, Transport,
};
pub use http::{HttpClient, HttpClientBuilder};
