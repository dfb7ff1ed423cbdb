//! URL construction

use shopfront_domain::constants::{PGID_SEGMENT, SPGID_SEGMENT};
use shopfront_domain::RequestOptions;

use crate::ports::ConfigProvider;

/// `true` for paths that already carry an `http://` or `https://` scheme.
pub fn is_absolute(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://")
}

/// Build the final URL of a call.
///
/// Absolute paths pass through untouched. Relative paths become
/// `endpoint + locale segment + '/' + first segment + group id segment + rest`,
/// with the optional segments empty when their value is unknown.
pub fn resolve_url(path: &str, options: &RequestOptions, config: &dyn ConfigProvider) -> String {
    if is_absolute(path) {
        return path.to_string();
    }

    let locale = config.locale().map(|l| l.url_segment()).unwrap_or_default();
    let group = group_id_segment(options, config.group_id().as_deref());
    let (first, rest) = split_first_segment(path);

    format!("{}{}/{}{}{}", config.rest_endpoint(), locale, first, group, rest)
}

/// Group id matrix parameter for the first path segment.
///
/// `send_pgid` wins when both flags are set.
pub fn group_id_segment(options: &RequestOptions, group_id: Option<&str>) -> String {
    match group_id.filter(|id| !id.is_empty()) {
        Some(id) if options.send_pgid => format!("{PGID_SEGMENT}{id}"),
        Some(id) if options.send_spgid => format!("{SPGID_SEGMENT}{id}"),
        _ => String::new(),
    }
}

// Remainder keeps its leading slash.
fn split_first_segment(path: &str) -> (&str, &str) {
    match path.find('/') {
        Some(idx) => path.split_at(idx),
        None => (path, ""),
    }
}
