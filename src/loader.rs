//! Fetching collection documents from a URL or a local file

use crate::content::Collection;
use chrono::Utc;
use serde_json::Value;
use std::fmt;
use std::path::PathBuf;
use tracing::debug;

/// Where a collection document lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocation {
    Url(String),
    File(PathBuf),
}

impl SourceLocation {
    pub fn parse(location: &str) -> Self {
        let trimmed = location.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            SourceLocation::Url(trimmed.to_string())
        } else {
            SourceLocation::File(PathBuf::from(trimmed))
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceLocation::Url(url) => f.write_str(url),
            SourceLocation::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("request to {location} failed: {source}")]
    Http {
        location: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error! status: {status} ({location})")]
    Status {
        location: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid collection document {location}: {source}")]
    Parse {
        location: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Read the raw bytes behind `location`
pub async fn fetch_document(
    client: &reqwest::Client,
    location: &SourceLocation,
) -> Result<Vec<u8>, LoadError> {
    match location {
        SourceLocation::Url(url) => {
            let http = |source| LoadError::Http {
                location: url.clone(),
                source,
            };
            let response = client.get(url).send().await.map_err(http)?;
            if !response.status().is_success() {
                return Err(LoadError::Status {
                    location: url.clone(),
                    status: response.status(),
                });
            }
            let bytes = response.bytes().await.map_err(http)?;
            Ok(bytes.to_vec())
        }
        SourceLocation::File(path) => {
            tokio::fs::read(path).await.map_err(|source| LoadError::Io {
                path: path.clone(),
                source,
            })
        }
    }
}

/// Decode a collection document. Accepts `{"<key>": [...]}` or a bare array.
pub fn parse_collection<C: Collection>(bytes: &[u8], location: &str) -> Result<Vec<C>, LoadError> {
    let parse_err = |source| LoadError::Parse {
        location: location.to_string(),
        source,
    };

    let document: Value = serde_json::from_slice(bytes).map_err(parse_err)?;
    let records = match document {
        Value::Object(mut map) => map
            .remove(C::DOCUMENT_KEY)
            .ok_or_else(|| {
                parse_err(<serde_json::Error as serde::de::Error>::missing_field(
                    C::DOCUMENT_KEY,
                ))
            })?,
        other => other,
    };
    let records: Vec<C::Record> = serde_json::from_value(records).map_err(parse_err)?;
    Ok(C::from_records(records, Utc::now()))
}

/// Fetch and decode a whole collection
pub async fn load_collection<C: Collection>(
    client: &reqwest::Client,
    location: &SourceLocation,
) -> Result<Vec<C>, LoadError> {
    let bytes = fetch_document(client, location).await?;
    let items = parse_collection::<C>(&bytes, &location.to_string())?;
    debug!(location = %location, count = items.len(), kind = C::NOUN, "Collection loaded");
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Article, Project, TimelineEntry};
    use crate::paginate::Listing;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn location_kind_is_detected() {
        assert_eq!(
            SourceLocation::parse("https://example.com/projects.json"),
            SourceLocation::Url("https://example.com/projects.json".into())
        );
        assert_eq!(
            SourceLocation::parse("HTTP://example.com/a.json"),
            SourceLocation::Url("HTTP://example.com/a.json".into())
        );
        assert_eq!(
            SourceLocation::parse(" data/projects.json "),
            SourceLocation::File(PathBuf::from("data/projects.json"))
        );
    }

    #[test]
    fn keyed_and_bare_documents() {
        let keyed = br#"{"version": "2", "projects": [
            {"title": "One", "github_url": "https://github.com/x/one", "tags": ["Rust"]},
            {"title": "Two", "githubUrl": "https://github.com/x/two", "liveUrl": "https://two.dev"}
        ]}"#;
        let projects = parse_collection::<Project>(keyed, "keyed").unwrap();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].tags, ["Rust"]);
        assert_eq!(projects[1].github_url, "https://github.com/x/two");
        assert_eq!(projects[1].live_url.as_deref(), Some("https://two.dev"));

        let bare = br#"[{"slug": "a", "title": "A", "date": 1704067200000}]"#;
        let articles = parse_collection::<Article>(bare, "bare").unwrap();
        assert_eq!(articles[0].key(), "a");
        assert_eq!(articles[0].display_date(), "January 1, 2024");
    }

    #[test]
    fn missing_key_is_a_parse_error() {
        let err = parse_collection::<TimelineEntry>(br#"{"projects": []}"#, "wrong").unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
        assert!(err.to_string().contains("timeline"));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = parse_collection::<Project>(b"{ not json", "broken").unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));

        let err = parse_collection::<Project>(br#"{"projects": [{"description": "no title"}]}"#, "x")
            .unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn empty_collection_loads() {
        let projects = parse_collection::<Project>(br#"{"projects": []}"#, "empty").unwrap();
        assert!(projects.is_empty());
    }

    #[tokio::test]
    async fn loads_from_file() {
        let file = write_temp(
            r#"{"timeline": [
                {"role": "Engineer", "organization": "Acme", "duration": "Mar 2018 - Dec 2021"},
                {"role": "Lead", "organization": "Initech", "duration": "Jan 2022 - Present"}
            ]}"#,
        );
        let location = SourceLocation::File(file.path().to_path_buf());
        let client = reqwest::Client::new();
        let entries = load_collection::<TimelineEntry>(&client, &location).await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].key(), "Lead @ Initech");
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let location = SourceLocation::File(dir.path().join("absent.json"));
        let client = reqwest::Client::new();
        let err = load_collection::<Project>(&client, &location).await.unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
