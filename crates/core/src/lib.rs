//! # Shopfront Core
//!
//! Pure request-building logic - no transport dependencies.
//!
//! This crate contains:
//! - URL and header resolution for backend calls
//! - The execution barrier serializing exclusive calls
//! - Link descriptor validation and envelope unpacking
//! - Port interfaces (traits) for live configuration
//!
//! ## Architecture Principles
//! - Only depends on `shopfront-domain`
//! - No HTTP client code
//! - All external state read via traits

pub mod barrier;
pub mod envelope;
pub mod links;
pub mod ports;
pub mod request;

// Re-export specific items to avoid ambiguity
pub use barrier::{BarrierGuard, BarrierState, ExecutionBarrier};
pub use envelope::unpack_envelope;
pub use links::{link_target, link_url, valid_link_targets};
pub use ports::ConfigProvider;
pub use request::{resolve_headers, resolve_url};
