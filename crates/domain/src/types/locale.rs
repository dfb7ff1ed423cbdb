//! Locale selection

use serde::{Deserialize, Serialize};

/// Language and currency pair the backend renders prices and texts in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locale {
    /// Language tag, e.g. `en_US`
    pub lang: String,
    /// ISO 4217 currency code, e.g. `USD`
    pub currency: String,
}

impl Locale {
    pub fn new(lang: impl Into<String>, currency: impl Into<String>) -> Self {
        Self { lang: lang.into(), currency: currency.into() }
    }

    /// Matrix parameter segment appended to the REST endpoint.
    pub fn url_segment(&self) -> String {
        format!(";loc={};cur={}", self.lang, self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_segment() {
        let locale = Locale::new("en_US", "USD");
        assert_eq!(locale.url_segment(), ";loc=en_US;cur=USD");
    }
}
