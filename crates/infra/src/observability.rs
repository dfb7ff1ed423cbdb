//! Tracing setup
//!
//! Installs a `tracing-subscriber` fmt subscriber filtered by `RUST_LOG`.
//! Library code only emits events; binaries decide whether to call this.

use shopfront_domain::{Result, ShopfrontError};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "info";

/// Install the global subscriber.
///
/// `RUST_LOG` overrides the default `info` filter. With `json` set, events
/// are written as one JSON object per line.
///
/// # Errors
/// Returns `ShopfrontError::Internal` if a global subscriber is already set.
pub fn init_tracing(json: bool) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let registry = tracing_subscriber::registry().with(filter);
    let result = if json {
        registry.with(fmt::layer().json().with_current_span(true)).try_init()
    } else {
        registry.with(fmt::layer().with_target(true)).try_init()
    };

    result.map_err(|e| ShopfrontError::Internal(format!("Failed to install tracing subscriber: {e}")))
}
