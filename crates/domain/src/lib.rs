//! # Shopfront Domain
//!
//! Data types shared by every layer of the storefront API access stack.
//!
//! This crate contains:
//! - Request option and resolved request types
//! - Link, locale and captcha models
//! - Domain error types and Result definitions
//! - Configuration structures and header constants
//!
//! ## Architecture
//! - No dependencies on other Shopfront crates
//! - Only external dependencies allowed
//! - Pure data structures, no I/O

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
