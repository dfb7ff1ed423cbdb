//! Integration tests for domain types crossing the serde boundary

use shopfront_domain::{ApiConfig, Captcha, Locale, RequestOptions, ShopfrontError};

#[test]
fn test_api_config_defaults_missing_fields() {
    let config: ApiConfig = serde_json::from_str(
        r#"{
            "rest_endpoint": "https://shop.example.com/rest/WFS/site/-",
            "server_url": "https://shop.example.com"
        }"#,
    )
    .unwrap();

    assert_eq!(config.timeout_secs, 30);
    assert_eq!(config.user_agent, None);
    assert_eq!(config.locale, None);
}

#[test]
fn test_api_config_with_locale() {
    let config: ApiConfig = serde_json::from_str(
        r#"{
            "rest_endpoint": "https://shop.example.com/rest/WFS/site/-",
            "server_url": "https://shop.example.com",
            "timeout_secs": 5,
            "locale": { "lang": "de_DE", "currency": "EUR" }
        }"#,
    )
    .unwrap();

    assert_eq!(config.timeout_secs, 5);
    assert_eq!(config.locale, Some(Locale::new("de_DE", "EUR")));
}

#[test]
fn test_captcha_wire_names() {
    let captcha: Captcha =
        serde_json::from_str(r#"{"captcha":"abc","captchaAction":"login"}"#).unwrap();
    assert_eq!(captcha, Captcha::v3("abc", "login"));

    let json = serde_json::to_value(Captcha::v2("abc")).unwrap();
    assert_eq!(json, serde_json::json!({ "captcha": "abc" }));
}

#[test]
fn test_request_options_builder() {
    let options = RequestOptions::default()
        .param("attrs", "sku,salePrice")
        .param("amount", "10")
        .run_exclusively()
        .send_pgid();

    assert_eq!(
        options.params,
        vec![("attrs".to_string(), "sku,salePrice".to_string()), ("amount".to_string(), "10".to_string())]
    );
    assert!(options.run_exclusively);
    assert!(options.send_pgid);
    assert!(!options.send_spgid);
    assert!(!options.skip_api_error_handling);
    assert!(options.captcha.is_none());
}

#[test]
fn test_error_serialization_is_tagged() {
    let json = serde_json::to_value(ShopfrontError::MalformedLink("missing uri".into())).unwrap();
    assert_eq!(json, serde_json::json!({ "type": "MalformedLink", "message": "missing uri" }));
}
