//! Link descriptor validation

use shopfront_domain::{Link, Result, ShopfrontError};
use tracing::debug;

/// URI of a single link, or `MalformedLink` when the descriptor lacks the
/// `Link` type tag or a URI.
pub fn link_target(link: &Link) -> Result<&str> {
    link.target().ok_or_else(|| {
        ShopfrontError::MalformedLink(format!(
            "expected type 'Link' with a uri, got type {:?}",
            link.link_type.as_deref().unwrap_or("<none>")
        ))
    })
}

/// URIs of the well-formed links, in input order. Malformed entries are
/// dropped.
pub fn valid_link_targets(links: &[Link]) -> Vec<&str> {
    let targets: Vec<&str> = links.iter().filter_map(Link::target).collect();
    if targets.len() != links.len() {
        debug!(dropped = links.len() - targets.len(), "ignoring malformed links");
    }
    targets
}

/// Absolute URL of a link target below the server root.
pub fn link_url(server_url: &str, uri: &str) -> String {
    format!("{server_url}/{uri}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn other() -> Link {
        Link { link_type: Some("Other".into()), ..Default::default() }
    }

    #[test]
    fn test_malformed_link_rejected() {
        let err = link_target(&other()).unwrap_err();
        assert!(matches!(err, ShopfrontError::MalformedLink(_)));
    }

    #[test]
    fn test_valid_link_target() {
        assert_eq!(link_target(&Link::new("a")).unwrap(), "a");
    }

    #[test]
    fn test_filter_keeps_order() {
        let links = vec![Link::new("a"), other(), Link::new("b")];
        assert_eq!(valid_link_targets(&links), vec!["a", "b"]);
        assert!(valid_link_targets(&[]).is_empty());
    }

    #[test]
    fn test_link_url() {
        assert_eq!(
            link_url("https://shop.example.com/INTERSHOP", "rest/WFS/site/-/products/1"),
            "https://shop.example.com/INTERSHOP/rest/WFS/site/-/products/1"
        );
    }
}
