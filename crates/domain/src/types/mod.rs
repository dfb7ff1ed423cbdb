//! Domain types and models

pub mod captcha;
pub mod link;
pub mod locale;
pub mod request;

pub use captcha::Captcha;
pub use link::Link;
pub use locale::Locale;
pub use request::{RequestOptions, ResolvedRequest};
