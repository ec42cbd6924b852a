//! Hyperlink references
//!
//! TimeSide links resources to each other with hyperlinks such as
//! `/timeside/api/items/{uuid}/`. The server echoes them back as absolute
//! URLs, so comparisons are always made on the path component.

use url::Url;
use uuid::Uuid;

/// Root path of the TimeSide REST API
pub const API_ROOT: &str = "/timeside/api";

/// Builds the hyperlink path of a resource, e.g. `/timeside/api/items/{id}/`
pub fn resource_path(collection: &str, id: Uuid) -> String {
    format!("{}/{}/{}/", API_ROOT, collection, id)
}

/// Removes scheme and host from a hyperlink
///
/// Absolute URLs are reduced to their path. Anything that does not parse as
/// an absolute URL is assumed to already be a path and is returned as is.
pub fn strip_host(link: &str) -> String {
    match Url::parse(link) {
        Ok(url) if url.has_host() => url.path().to_string(),
        _ => link.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_path() {
        let id = Uuid::nil();
        assert_eq!(
            resource_path("items", id),
            "/timeside/api/items/00000000-0000-0000-0000-000000000000/"
        );
    }

    #[test]
    fn test_strip_host_absolute() {
        assert_eq!(
            strip_host("https://sandbox.wasabi.telemeta.org/timeside/api/presets/abc/"),
            "/timeside/api/presets/abc/"
        );
    }

    #[test]
    fn test_strip_host_keeps_paths() {
        assert_eq!(
            strip_host("/timeside/api/presets/abc/"),
            "/timeside/api/presets/abc/"
        );
    }
}
