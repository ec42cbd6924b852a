//! Item domain types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use uuid::Uuid;

use crate::reference::resource_path;

/// External media integration known to the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Provider {
    YouTube,
    Deezer,
}

impl Provider {
    /// Hyperlink of the server-side provider definition
    pub fn reference(&self) -> &'static str {
        match self {
            Provider::YouTube => "/timeside/api/providers/e011cca7-a0b9-45cc-9b31-fc1cbf8f54f5/",
            Provider::Deezer => "/timeside/api/providers/dbed86a2-c153-4ed5-a0b3-cef5fcbda7bf/",
        }
    }

    /// Detects the provider serving `host`, with or without the `www.` label
    pub fn from_host(host: &str) -> Option<Self> {
        let host = host.to_ascii_lowercase();
        match host.strip_prefix("www.").unwrap_or(&host) {
            "youtube.com" => Some(Provider::YouTube),
            "deezer.com" => Some(Provider::Deezer),
            _ => None,
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::YouTube => write!(f, "youtube"),
            Provider::Deezer => write!(f, "deezer"),
        }
    }
}

/// Where the media bytes of an item come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemSource {
    /// Media fetched by the server through a provider integration
    ExternalProvider { uri: String, provider: Provider },
    /// Media downloaded by the server from a plain URL
    ExternalUrl { uri: String },
    /// Local file uploaded with the item
    LocalFile { path: PathBuf },
}

impl ItemSource {
    /// Short label used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            ItemSource::ExternalProvider { .. } => "provider",
            ItemSource::ExternalUrl { .. } => "url",
            ItemSource::LocalFile { .. } => "file",
        }
    }
}

/// Remote media item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "uuid")]
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

impl Item {
    /// Hyperlink used to reference this item from a collection or job
    pub fn reference(&self) -> String {
        resource_path("items", self.id)
    }
}

/// Description attached to every imported item
pub fn description_for(origin: &str, album: &str) -> String {
    format!("Music from {} - {}", origin, album)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_from_host() {
        assert_eq!(Provider::from_host("www.youtube.com"), Some(Provider::YouTube));
        assert_eq!(Provider::from_host("youtube.com"), Some(Provider::YouTube));
        assert_eq!(Provider::from_host("www.deezer.com"), Some(Provider::Deezer));
        assert_eq!(Provider::from_host("WWW.Deezer.com"), Some(Provider::Deezer));
        assert_eq!(Provider::from_host("example.com"), None);
        assert_eq!(Provider::from_host("notyoutube.com"), None);
    }

    #[test]
    fn test_description_for() {
        assert_eq!(
            description_for("FIP", "Kind of Blue"),
            "Music from FIP - Kind of Blue"
        );
    }

    #[test]
    fn test_item_reference() {
        let item = Item {
            id: Uuid::nil(),
            title: "t".to_string(),
            description: String::new(),
            external_uri: None,
            provider: None,
            source_url: None,
        };
        assert_eq!(
            item.reference(),
            "/timeside/api/items/00000000-0000-0000-0000-000000000000/"
        );
    }
}
