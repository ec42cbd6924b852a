//! Batch input records

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// One row of an import batch
///
/// Missing fields deserialize as empty strings; [`InputRecord::validate`]
/// is what rejects them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputRecord {
    #[serde(default)]
    pub title: String,
    /// Source locator: an http(s) URL or a path relative to the batch file
    #[serde(default)]
    pub url: String,
    /// Origin (station, label, ...) of the track
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub album_title: String,
}

/// Field of an [`InputRecord`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordField {
    Title,
    Url,
    Name,
    AlbumTitle,
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RecordField::Title => "title",
            RecordField::Url => "url",
            RecordField::Name => "name",
            RecordField::AlbumTitle => "albumTitle",
        };
        f.write_str(s)
    }
}

/// Record rejected before any remote call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid record: empty {field}")]
pub struct MissingField {
    pub field: RecordField,
}

impl InputRecord {
    /// Checks that every field is non-empty
    ///
    /// Fields are checked in declaration order; the first empty one is
    /// reported.
    pub fn validate(&self) -> Result<(), MissingField> {
        let fields = [
            (RecordField::Title, &self.title),
            (RecordField::Url, &self.url),
            (RecordField::Name, &self.name),
            (RecordField::AlbumTitle, &self.album_title),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(MissingField { field });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> InputRecord {
        InputRecord {
            title: "So What".to_string(),
            url: "https://www.youtube.com/watch?v=zqNTltOGh5c".to_string(),
            name: "FIP".to_string(),
            album_title: "Kind of Blue".to_string(),
        }
    }

    #[test]
    fn test_valid_record() {
        assert!(record().validate().is_ok());
    }

    #[test]
    fn test_each_missing_field_is_named() {
        let cases: [(fn(&mut InputRecord), RecordField); 4] = [
            (|r| r.title.clear(), RecordField::Title),
            (|r| r.url.clear(), RecordField::Url),
            (|r| r.name.clear(), RecordField::Name),
            (|r| r.album_title = "  ".to_string(), RecordField::AlbumTitle),
        ];
        for (clear, field) in cases {
            let mut r = record();
            clear(&mut r);
            assert_eq!(r.validate(), Err(MissingField { field }));
        }
    }

    #[test]
    fn test_deserialize_batch_row() {
        let r: InputRecord = serde_json::from_str(
            r#"{"title": "a", "url": "b.mp3", "name": "c", "albumTitle": "d"}"#,
        )
        .unwrap();
        assert_eq!(r.album_title, "d");

        let partial: InputRecord = serde_json::from_str(r#"{"title": "a"}"#).unwrap();
        assert_eq!(
            partial.validate(),
            Err(MissingField {
                field: RecordField::Url
            })
        );
    }

    #[test]
    fn test_missing_field_message() {
        let err = MissingField {
            field: RecordField::AlbumTitle,
        };
        assert_eq!(err.to_string(), "invalid record: empty albumTitle");
    }
}
