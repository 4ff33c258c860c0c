//! Displayable items built from the raw collection records

use crate::constants::{DEFAULT_COVER_IMAGE, WORDS_PER_MINUTE};
use crate::dates::{resolve_timestamp, DateSource, DatedRecord, FALLBACK_INSTANT};
use crate::paginate::{Listing, Recency};
use crate::types::{ArticleRecord, ProjectRecord, RawTimestamp, TimelineRecord};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use std::collections::HashSet;

const ARTICLE_DATE_SOURCES: &[DateSource] = &[DateSource::DataAttribute, DateSource::LabelText];
const TIMELINE_DATE_SOURCES: &[DateSource] =
    &[DateSource::DataAttribute, DateSource::DurationStart];

/// An item type that can be loaded from a collection document
pub trait Collection: Listing + Sized {
    type Record: DeserializeOwned;

    /// Field holding the records in a keyed document, e.g. `{"projects": [...]}`
    const DOCUMENT_KEY: &'static str;

    /// Plural noun used in counters and messages
    const NOUN: &'static str;

    fn from_records(records: Vec<Self::Record>, now: DateTime<Utc>) -> Vec<Self>;
}

/// Repeated display keys get their source position appended so every card
/// has its own UI id.
fn make_keys_unique<T>(items: &mut [T], key_of: impl Fn(&mut T) -> &mut String) {
    let mut seen = HashSet::new();
    for (position, item) in items.iter_mut().enumerate() {
        let key = key_of(item);
        let mut unique = key.clone();
        while !seen.insert(unique.clone()) {
            unique = format!("{unique}#{position}");
        }
        *key = unique;
    }
}

// =============================================================================
// Projects
// =============================================================================

#[derive(Debug, Clone)]
pub struct Project {
    pub key: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub tags: Vec<String>,
    pub github_url: String,
    pub live_url: Option<String>,
    pub featured: bool,
    position: usize,
}

impl Project {
    pub fn from_record(record: ProjectRecord, position: usize) -> Self {
        let key = record
            .id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| record.title.clone());
        Self {
            key,
            title: record.title,
            description: record.description,
            image: record.image,
            tags: record.tags,
            github_url: record.github_url,
            live_url: record.live_url.filter(|url| !url.trim().is_empty()),
            featured: record.featured,
            position,
        }
    }
}

impl Listing for Project {
    fn key(&self) -> &str {
        &self.key
    }

    fn title(&self) -> &str {
        &self.title
    }

    // projects.json is maintained newest-first and carries no dates
    fn recency(&self) -> Recency {
        Recency::listed(self.position)
    }
}

impl Collection for Project {
    type Record = ProjectRecord;
    const DOCUMENT_KEY: &'static str = "projects";
    const NOUN: &'static str = "projects";

    fn from_records(records: Vec<ProjectRecord>, _now: DateTime<Utc>) -> Vec<Self> {
        let mut projects: Vec<Project> = records
            .into_iter()
            .enumerate()
            .map(|(position, record)| Project::from_record(record, position))
            .collect();
        make_keys_unique(&mut projects, |p| &mut p.key);
        projects
    }
}

// =============================================================================
// Articles
// =============================================================================

impl DatedRecord for ArticleRecord {
    fn date_attribute(&self) -> Option<&RawTimestamp> {
        self.date.as_ref()
    }

    fn date_label(&self) -> Option<&str> {
        self.date_text.as_deref()
    }
}

#[derive(Debug, Clone)]
pub struct Article {
    pub slug: String,
    pub title: String,
    pub published_at: DateTime<Utc>,
    /// Label from the source, kept for undated articles
    pub date_text: Option<String>,
    pub excerpt: String,
    pub tags: Vec<String>,
    pub cover_image: String,
    pub reading_minutes: usize,
}

impl Article {
    pub fn from_record(record: ArticleRecord, now: DateTime<Utc>) -> Self {
        let published_at = resolve_timestamp(ARTICLE_DATE_SOURCES, &record, &record.slug, now);
        let reading_minutes = reading_minutes(record.content.as_deref().unwrap_or(&record.excerpt));
        Self {
            published_at,
            reading_minutes,
            cover_image: record
                .cover_image
                .filter(|c| !c.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_COVER_IMAGE.to_string()),
            slug: record.slug,
            title: record.title,
            date_text: record.date_text,
            excerpt: record.excerpt,
            tags: record.tags,
        }
    }

    pub fn reading_time(&self) -> String {
        format!("{} min read", self.reading_minutes)
    }

    pub fn display_date(&self) -> String {
        if self.published_at == FALLBACK_INSTANT {
            self.date_text.clone().unwrap_or_else(|| "Undated".to_string())
        } else {
            self.published_at.format("%B %-d, %Y").to_string()
        }
    }
}

/// Minutes to read `text` at 200 words per minute, at least one
pub fn reading_minutes(text: &str) -> usize {
    let words = text.split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1)
}

impl Listing for Article {
    fn key(&self) -> &str {
        &self.slug
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn recency(&self) -> Recency {
        Recency::Dated(self.published_at)
    }
}

impl Collection for Article {
    type Record = ArticleRecord;
    const DOCUMENT_KEY: &'static str = "articles";
    const NOUN: &'static str = "articles";

    fn from_records(records: Vec<ArticleRecord>, now: DateTime<Utc>) -> Vec<Self> {
        records
            .into_iter()
            .map(|record| Article::from_record(record, now))
            .collect()
    }
}

// =============================================================================
// Timeline
// =============================================================================

impl DatedRecord for TimelineRecord {
    fn date_attribute(&self) -> Option<&RawTimestamp> {
        self.data_date.as_ref()
    }

    fn duration(&self) -> Option<&str> {
        Some(&self.duration)
    }
}

#[derive(Debug, Clone)]
pub struct TimelineEntry {
    pub key: String,
    pub role: String,
    pub organization: String,
    pub duration: String,
    pub summary: Option<String>,
    pub started_at: DateTime<Utc>,
}

impl TimelineEntry {
    pub fn from_record(record: TimelineRecord, now: DateTime<Utc>) -> Self {
        let key = if record.organization.is_empty() {
            record.role.clone()
        } else {
            format!("{} @ {}", record.role, record.organization)
        };
        let started_at = resolve_timestamp(TIMELINE_DATE_SOURCES, &record, &key, now);
        Self {
            key,
            started_at,
            role: record.role,
            organization: record.organization,
            duration: record.duration,
            summary: record.summary.filter(|s| !s.trim().is_empty()),
        }
    }
}

impl Listing for TimelineEntry {
    fn key(&self) -> &str {
        &self.key
    }

    fn title(&self) -> &str {
        &self.role
    }

    fn recency(&self) -> Recency {
        Recency::Dated(self.started_at)
    }
}

impl Collection for TimelineEntry {
    type Record = TimelineRecord;
    const DOCUMENT_KEY: &'static str = "timeline";
    const NOUN: &'static str = "roles";

    fn from_records(records: Vec<TimelineRecord>, now: DateTime<Utc>) -> Vec<Self> {
        let mut entries: Vec<TimelineEntry> = records
            .into_iter()
            .map(|record| TimelineEntry::from_record(record, now))
            .collect();
        make_keys_unique(&mut entries, |e| &mut e.key);
        entries
    }
}
