//! Header construction

use http::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use shopfront_domain::constants::{CAPTCHA_V2_COMPAT_PARAM, JSON_CONTENT_TYPE, TOKEN_HEADER_KEY};
use shopfront_domain::{Captcha, RequestOptions, Result, ShopfrontError};

/// `content-type` and `Accept`, both `application/json`.
pub fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
    headers.insert(ACCEPT, HeaderValue::from_static(JSON_CONTENT_TYPE));
    headers
}

/// Build the header set of a call.
///
/// Caller headers replace defaults of the same name. A captcha sets the
/// `Authorization` header; without one, the API token is attached unless the
/// caller already supplied an `Authorization` header. A request never carries
/// both the captcha and the token.
///
/// # Errors
///
/// Returns `ShopfrontError::InvalidInput` when the token or captcha cannot be
/// encoded as a header value.
pub fn resolve_headers(options: &RequestOptions, api_token: Option<&str>) -> Result<HeaderMap> {
    let mut headers = default_headers();

    for name in options.headers.keys() {
        headers.remove(name);
        for value in options.headers.get_all(name) {
            headers.append(name.clone(), value.clone());
        }
    }

    let token_key = HeaderName::from_static(TOKEN_HEADER_KEY);

    if let Some(captcha) = &options.captcha {
        let value = header_value(&captcha_authorization(captcha), "captcha")?;
        headers.remove(&token_key);
        headers.insert(AUTHORIZATION, value);
    } else if let Some(token) = api_token.filter(|t| !t.is_empty()) {
        if !headers.contains_key(AUTHORIZATION) {
            headers.insert(token_key, header_value(token, "api token")?);
        }
    }

    Ok(headers)
}

/// `Authorization` value for captcha-protected calls.
///
/// reCAPTCHA v3 credentials name their action; v2 credentials carry a fixed
/// second parameter instead.
pub fn captcha_authorization(captcha: &Captcha) -> String {
    match &captcha.captcha_action {
        Some(action) => format!("CAPTCHA recaptcha_token={} action={}", captcha.captcha, action),
        None => format!("CAPTCHA g-recaptcha-response={} {}", captcha.captcha, CAPTCHA_V2_COMPAT_PARAM),
    }
}

fn header_value(raw: &str, what: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(raw).map_err(|_| {
        ShopfrontError::InvalidInput(format!("{what} contains characters not allowed in a header"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
        headers.get(name).and_then(|v| v.to_str().ok())
    }

    #[test]
    fn test_empty_options_yield_defaults() {
        let headers = resolve_headers(&RequestOptions::default(), None).unwrap();
        assert_eq!(headers, default_headers());
        assert_eq!(headers.len(), 2);
        assert_eq!(get(&headers, "content-type"), Some("application/json"));
        assert_eq!(get(&headers, "Accept"), Some("application/json"));
    }

    #[test]
    fn test_caller_headers_override_defaults() {
        let options = RequestOptions::default()
            .header(ACCEPT, HeaderValue::from_static("application/pdf"))
            .header(HeaderName::from_static("x-custom"), HeaderValue::from_static("1"));

        let headers = resolve_headers(&options, None).unwrap();
        assert_eq!(get(&headers, "accept"), Some("application/pdf"));
        assert_eq!(headers.get_all(ACCEPT).iter().count(), 1);
        assert_eq!(get(&headers, "x-custom"), Some("1"));
        assert_eq!(get(&headers, "content-type"), Some("application/json"));
    }

    #[test]
    fn test_api_token_attached() {
        let headers = resolve_headers(&RequestOptions::default(), Some("tok")).unwrap();
        assert_eq!(get(&headers, TOKEN_HEADER_KEY), Some("tok"));
        assert!(!headers.contains_key(AUTHORIZATION));
    }

    #[test]
    fn test_api_token_skipped_when_authorization_present() {
        let options = RequestOptions::default()
            .header(AUTHORIZATION, HeaderValue::from_static("BASIC dXNlcjpwYXNz"));

        let headers = resolve_headers(&options, Some("tok")).unwrap();
        assert!(!headers.contains_key(TOKEN_HEADER_KEY));
        assert_eq!(get(&headers, "authorization"), Some("BASIC dXNlcjpwYXNz"));
    }

    #[test]
    fn test_captcha_v3_header() {
        let options = RequestOptions::default().captcha(Captcha::v3("abc", "login"));
        let headers = resolve_headers(&options, None).unwrap();
        assert_eq!(get(&headers, "Authorization"), Some("CAPTCHA recaptcha_token=abc action=login"));
    }

    #[test]
    fn test_captcha_v2_header() {
        let options = RequestOptions::default().captcha(Captcha::v2("abc"));
        let headers = resolve_headers(&options, None).unwrap();
        assert_eq!(get(&headers, "Authorization"), Some("CAPTCHA g-recaptcha-response=abc foo=bar"));
    }

    #[test]
    fn test_captcha_and_token_never_both_present() {
        let options = RequestOptions::default()
            .captcha(Captcha::v2("abc"))
            .header(HeaderName::from_static(TOKEN_HEADER_KEY), HeaderValue::from_static("stale"));

        let headers = resolve_headers(&options, Some("tok")).unwrap();
        assert!(headers.contains_key(AUTHORIZATION));
        assert!(!headers.contains_key(TOKEN_HEADER_KEY));
    }

    #[test]
    fn test_invalid_token_rejected() {
        let result = resolve_headers(&RequestOptions::default(), Some("bad\ntoken"));
        assert!(matches!(result, Err(ShopfrontError::InvalidInput(_))));
    }

    #[test]
    fn test_empty_token_ignored() {
        let headers = resolve_headers(&RequestOptions::default(), Some("")).unwrap();
        assert_eq!(headers, default_headers());
    }
}
