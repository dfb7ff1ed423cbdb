//! Wire-level constants
//!
//! Header names and values the commerce backend expects on every call.

/// Header carrying the customer's API token.
pub const TOKEN_HEADER_KEY: &str = "authentication-token";

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Link descriptors must carry this type tag to be resolvable.
pub const LINK_TYPE: &str = "Link";

/// Envelope key used by list responses.
pub const DEFAULT_ENVELOPE_KEY: &str = "elements";

/// Second parameter appended to reCAPTCHA v2 credentials. The backend parser
/// rejects the header with a single parameter.
pub const CAPTCHA_V2_COMPAT_PARAM: &str = "foo=bar";

// Group identifier URL segment prefixes
pub const PGID_SEGMENT: &str = ";pgid=";
pub const SPGID_SEGMENT: &str = ";spgid=";
