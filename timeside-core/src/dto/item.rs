//! Item DTOs

use serde::Serialize;

use crate::domain::item::ItemSource;

/// Request to create an item
///
/// Not serializable as a whole: a local file source is uploaded as a
/// multipart body, everything else goes out as [`ItemJson`].
#[derive(Debug, Clone)]
pub struct CreateItem {
    pub title: String,
    pub description: String,
    pub source: ItemSource,
}

/// JSON body for items whose media the server fetches itself
#[derive(Debug, Clone, Serialize)]
pub struct ItemJson<'a> {
    pub title: &'a str,
    pub description: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_uri: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<&'a str>,
}

impl CreateItem {
    /// JSON body for remote sources, `None` for local files
    pub fn json_body(&self) -> Option<ItemJson<'_>> {
        let (external_uri, provider, source_url) = match &self.source {
            ItemSource::ExternalProvider { uri, provider } => {
                (Some(uri.as_str()), Some(provider.reference()), None)
            }
            ItemSource::ExternalUrl { uri } => (None, None, Some(uri.as_str())),
            ItemSource::LocalFile { .. } => return None,
        };
        Some(ItemJson {
            title: &self.title,
            description: &self.description,
            external_uri,
            provider,
            source_url,
        })
    }
}
