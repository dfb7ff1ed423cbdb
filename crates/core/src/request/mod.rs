//! Request resolution
//!
//! Turns a logical path plus [`RequestOptions`] into the URL and headers of
//! a backend call.
//!
//! [`RequestOptions`]: shopfront_domain::RequestOptions

pub mod headers;
pub mod url;

pub use headers::{captcha_authorization, default_headers, resolve_headers};
pub use url::{group_id_segment, is_absolute, resolve_url};
