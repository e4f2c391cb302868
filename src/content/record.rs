//! Content records produced by the loader

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a content record, stable per source file
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentId(String);

impl ContentId {
    /// Derive the identifier from a source path relative to the content directory
    pub fn from_source(source: &str) -> Self {
        let normalized = source.replace('\\', "/");
        Self(normalized.trim_start_matches('/').to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One blog or project entry sourced from a markdown file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    pub id: ContentId,

    /// Site-relative URL, unique among records
    pub path: String,

    pub title: String,

    /// Summary shown in listings
    pub description: String,

    /// Publication date, used for ordering
    pub date: NaiveDate,

    /// CSS gradient or color token for list cards
    pub background_style: Option<String>,

    /// Estimated reading time
    pub read_time_minutes: Option<u32>,

    /// Plain-text opening of the body
    pub excerpt: Option<String>,

    /// Rendered HTML body
    #[serde(skip)]
    pub content: String,

    /// Source file path (relative to the content directory)
    pub source: String,
}

impl ContentRecord {
    /// Create a record with the required fields; optional fields start empty
    pub fn new(
        source: &str,
        path: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: ContentId::from_source(source),
            path: path.into(),
            title: title.into(),
            description: description.into(),
            date,
            background_style: None,
            read_time_minutes: None,
            excerpt: None,
            content: String::new(),
            source: source.to_string(),
        }
    }

    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.background_style = Some(background.into());
        self
    }

    pub fn with_read_time(mut self, minutes: u32) -> Self {
        self.read_time_minutes = Some(minutes);
        self
    }
}
