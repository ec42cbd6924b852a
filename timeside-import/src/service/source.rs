//! Source-locator resolution
//!
//! Turns the `url` field of a record into an [`ItemSource`]. Only http(s)
//! locators are treated as URLs; anything else is a path relative to the
//! batch file's directory.

use std::path::Path;
use timeside_core::domain::item::{ItemSource, Provider};
use tracing::debug;
use url::Url;

use crate::error::{ImportError, Result};

/// Resolves a source locator
///
/// Local files are checked for existence and opened once to make sure they
/// are readable; the upload itself reopens and streams them.
pub async fn resolve_source(locator: &str, base_dir: &Path) -> Result<ItemSource> {
    let locator = locator.trim();

    if let Some(url) = parse_http(locator) {
        return resolve_url(locator, &url);
    }

    let path = base_dir.join(locator);
    let unresolved = |reason: String| ImportError::SourceResolution {
        locator: locator.to_string(),
        reason,
    };

    let metadata = tokio::fs::metadata(&path)
        .await
        .map_err(|e| unresolved(format!("{}: {}", path.display(), e)))?;
    if !metadata.is_file() {
        return Err(unresolved(format!("{} is not a file", path.display())));
    }
    tokio::fs::File::open(&path)
        .await
        .map_err(|e| unresolved(format!("{}: {}", path.display(), e)))?;

    debug!(path = %path.display(), size = metadata.len(), "Resolved local media file");
    Ok(ItemSource::LocalFile { path })
}

fn parse_http(locator: &str) -> Option<Url> {
    Url::parse(locator)
        .ok()
        .filter(|url| matches!(url.scheme(), "http" | "https"))
}

fn resolve_url(locator: &str, url: &Url) -> Result<ItemSource> {
    let host = url.host_str().unwrap_or_default();

    // Short links carry the video id as their path
    if host.eq_ignore_ascii_case("youtu.be") {
        let id = url.path().trim_matches('/');
        if id.is_empty() {
            return Err(ImportError::SourceResolution {
                locator: locator.to_string(),
                reason: "short YouTube link without video id".to_string(),
            });
        }
        return Ok(ItemSource::ExternalProvider {
            uri: format!("https://www.youtube.com/watch?v={}", id),
            provider: Provider::YouTube,
        });
    }

    Ok(match Provider::from_host(host) {
        Some(provider) => ItemSource::ExternalProvider {
            uri: locator.to_string(),
            provider,
        },
        None => ItemSource::ExternalUrl {
            uri: locator.to_string(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_youtube_url() {
        let source = resolve_source("https://www.youtube.com/watch?v=X", Path::new("."))
            .await
            .unwrap();
        assert_eq!(
            source,
            ItemSource::ExternalProvider {
                uri: "https://www.youtube.com/watch?v=X".to_string(),
                provider: Provider::YouTube,
            }
        );
    }

    #[tokio::test]
    async fn test_youtube_short_link_is_normalized() {
        let source = resolve_source("https://youtu.be/UBPI95GIbGg", Path::new("."))
            .await
            .unwrap();
        assert_eq!(
            source,
            ItemSource::ExternalProvider {
                uri: "https://www.youtube.com/watch?v=UBPI95GIbGg".to_string(),
                provider: Provider::YouTube,
            }
        );
        assert!(resolve_source("https://youtu.be/", Path::new(".")).await.is_err());
    }

    #[tokio::test]
    async fn test_deezer_url() {
        let source = resolve_source("https://www.deezer.com/track/1", Path::new("."))
            .await
            .unwrap();
        assert!(matches!(
            source,
            ItemSource::ExternalProvider {
                provider: Provider::Deezer,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_unknown_host_is_plain_url() {
        let source = resolve_source("https://example.com/a.mp3", Path::new("."))
            .await
            .unwrap();
        assert_eq!(
            source,
            ItemSource::ExternalUrl {
                uri: "https://example.com/a.mp3".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_local_file_relative_to_batch_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("audio")).unwrap();
        std::fs::write(dir.path().join("audio/a.wav"), b"wav").unwrap();

        let source = resolve_source("audio/a.wav", dir.path()).await.unwrap();
        assert_eq!(
            source,
            ItemSource::LocalFile {
                path: dir.path().join("audio/a.wav")
            }
        );
    }

    #[tokio::test]
    async fn test_missing_local_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = resolve_source("missing.mp3", dir.path()).await.unwrap_err();
        assert!(matches!(err, ImportError::SourceResolution { .. }));
    }

    #[tokio::test]
    async fn test_directory_is_not_a_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("album")).unwrap();
        let err = resolve_source("album", dir.path()).await.unwrap_err();
        match err {
            ImportError::SourceResolution { reason, .. } => assert!(reason.contains("is not a file")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_non_http_scheme_is_a_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = resolve_source("ftp://example.com/a.mp3", dir.path())
            .await
            .unwrap_err();
        assert!(matches!(err, ImportError::SourceResolution { .. }));
    }
}
