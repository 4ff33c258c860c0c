//! Common types and data structures

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Ordering applied to a collection before it is paginated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    Newest,
    Oldest,
    NameAsc,
}

impl SortMode {
    pub const ALL: [SortMode; 3] = [SortMode::Newest, SortMode::Oldest, SortMode::NameAsc];

    /// Value emitted by the sort selector
    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::Newest => "newest",
            SortMode::Oldest => "oldest",
            SortMode::NameAsc => "name",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortMode::Newest => "Newest first",
            SortMode::Oldest => "Oldest first",
            SortMode::NameAsc => "Name (A-Z)",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort mode: {0}")]
pub struct UnknownSortMode(pub String);

impl FromStr for SortMode {
    type Err = UnknownSortMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "newest" => Ok(SortMode::Newest),
            "oldest" => Ok(SortMode::Oldest),
            "name" | "name-asc" | "nameasc" => Ok(SortMode::NameAsc),
            _ => Err(UnknownSortMode(s.to_string())),
        }
    }
}

/// Values shown next to a grid: "Showing {showing} of {total}"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Counters {
    pub showing: usize,
    pub total: usize,
}

/// A date as it appears in a source document, either text or epoch millis
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawTimestamp {
    Millis(f64),
    Text(String),
}

/// Project entry from projects.json
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectRecord {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, alias = "githubUrl")]
    pub github_url: String,
    #[serde(default, alias = "liveUrl")]
    pub live_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

/// Article entry. The date may come from the `date` attribute or the
/// human-readable `date_text` label.
#[derive(Debug, Clone, Deserialize)]
pub struct ArticleRecord {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub date: Option<RawTimestamp>,
    #[serde(default, alias = "dateText")]
    pub date_text: Option<String>,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, alias = "coverImage")]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// Experience timeline entry, e.g. duration "Jan 2021 - Present"
#[derive(Debug, Clone, Deserialize)]
pub struct TimelineRecord {
    pub role: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default, alias = "dataDate")]
    pub data_date: Option<RawTimestamp>,
}
