//! Date parsing for collection items
//!
//! Source documents carry dates in several shapes: an explicit date field, a
//! human-readable label, or the start of a duration range. Each item type
//! declares an ordered list of [`DateSource`]s; the first one that yields a
//! parseable value wins. Anything else resolves to [`FALLBACK_INSTANT`], which
//! sorts older than every real date.

use crate::types::RawTimestamp;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use tracing::warn;

/// Substituted for dates that cannot be parsed
pub const FALLBACK_INSTANT: DateTime<Utc> = DateTime::<Utc>::MIN_UTC;

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
];

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

// Tried after month-year so "January 2021" is never read as a day and year
const LOOSE_DATE_FORMATS: &[&str] = &["%B %d %Y", "%b %d %Y", "%m/%d/%Y"];

// Parsed with a synthetic day appended
const MONTH_YEAR_FORMATS: &[&str] = &["%B %Y %d", "%b %Y %d"];

const RANGE_SEPARATORS: &[&str] = &[" - ", " – ", " — ", " to "];

/// Parse a raw timestamp. `now` is what "Present" resolves to.
pub fn parse_timestamp(raw: &RawTimestamp, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    match raw {
        RawTimestamp::Millis(ms) if ms.is_finite() => DateTime::<Utc>::from_timestamp_millis(*ms as i64),
        RawTimestamp::Millis(_) => None,
        RawTimestamp::Text(text) => parse_date_text(text, now),
    }
}

pub fn parse_date_text(text: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if text.eq_ignore_ascii_case("present") || text.eq_ignore_ascii_case("now") {
        return Some(now);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, fmt) {
            return Some(dt.and_utc());
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, fmt) {
            return start_of_day(date);
        }
    }

    let with_day = format!("{} 1", text);
    for fmt in MONTH_YEAR_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(&with_day, fmt) {
            return start_of_day(date);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{}-01", text), "%Y-%m-%d") {
        return start_of_day(date);
    }
    for fmt in LOOSE_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, fmt) {
            return start_of_day(date);
        }
    }

    // Bare year
    if text.len() == 4 && text.chars().all(|c| c.is_ascii_digit()) {
        let year: i32 = text.parse().ok()?;
        return NaiveDate::from_ymd_opt(year, 1, 1).and_then(start_of_day);
    }

    None
}

fn start_of_day(date: NaiveDate) -> Option<DateTime<Utc>> {
    date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc())
}

/// Start of a duration such as "Mar 2019 - Dec 2021" or "2019-Present".
/// Text without a range is returned unchanged (trimmed).
pub fn range_start(duration: &str) -> &str {
    let duration = duration.trim();
    for sep in RANGE_SEPARATORS {
        if let Some((start, _)) = duration.split_once(sep) {
            return start.trim();
        }
    }

    // Compact year range "2019-2021" / "2019–Present", but not "2019-05"
    if let Some((start, end)) = duration.split_once(['-', '–']) {
        let end = end.trim();
        let is_year = |s: &str| s.len() == 4 && s.chars().all(|c| c.is_ascii_digit());
        if is_year(start.trim()) && (is_year(end) || end.eq_ignore_ascii_case("present")) {
            return start.trim();
        }
    }

    duration
}

/// Accessors a record exposes to the date extraction strategies
pub trait DatedRecord {
    /// Explicit date field (the `data-date` attribute in markup)
    fn date_attribute(&self) -> Option<&RawTimestamp> {
        None
    }

    /// Human-readable date label
    fn date_label(&self) -> Option<&str> {
        None
    }

    /// Duration range such as "Jan 2021 - Present"
    fn duration(&self) -> Option<&str> {
        None
    }
}

/// One way of locating a record's date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateSource {
    DataAttribute,
    LabelText,
    DurationStart,
}

impl DateSource {
    pub fn extract<R: DatedRecord + ?Sized>(self, record: &R) -> Option<RawTimestamp> {
        match self {
            DateSource::DataAttribute => record.date_attribute().cloned(),
            DateSource::LabelText => record
                .date_label()
                .filter(|s| !s.trim().is_empty())
                .map(|s| RawTimestamp::Text(s.to_string())),
            DateSource::DurationStart => record
                .duration()
                .map(range_start)
                .filter(|s| !s.is_empty())
                .map(|s| RawTimestamp::Text(s.to_string())),
        }
    }
}

/// Try each source in order; the first parseable value wins.
pub fn first_parseable<R: DatedRecord + ?Sized>(
    sources: &[DateSource],
    record: &R,
    now: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    sources
        .iter()
        .filter_map(|source| source.extract(record))
        .find_map(|raw| parse_timestamp(&raw, now))
}

/// Like [`first_parseable`], but substitutes [`FALLBACK_INSTANT`] and logs
/// when nothing parses. `key` identifies the record in the log.
pub fn resolve_timestamp<R: DatedRecord + ?Sized>(
    sources: &[DateSource],
    record: &R,
    key: &str,
    now: DateTime<Utc>,
) -> DateTime<Utc> {
    match first_parseable(sources, record, now) {
        Some(ts) => ts,
        None => {
            let raw: Vec<String> = sources
                .iter()
                .filter_map(|source| source.extract(record))
                .map(|raw| match raw {
                    RawTimestamp::Text(s) => s,
                    RawTimestamp::Millis(ms) => ms.to_string(),
                })
                .collect();
            warn!(item = %key, raw = ?raw, "Invalid date format, using fallback date");
            FALLBACK_INSTANT
        }
    }
}
