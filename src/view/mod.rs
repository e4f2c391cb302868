//! List view models - the presentation-ready shape of a content record

use serde::Serialize;

use crate::content::{ContentId, ContentRecord};
use crate::helpers::format_date;

/// Date pattern used when projecting records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat(String);

impl DateFormat {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self(pattern.into())
    }

    pub fn pattern(&self) -> &str {
        &self.0
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        Self::new("MMMM DD, YYYY")
    }
}

/// A record as seen by listing templates
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListViewModel {
    pub id: ContentId,
    pub title: String,
    pub path: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_time_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
}

/// Project one record into its list view model
pub fn project(record: &ContentRecord, format: &DateFormat) -> ListViewModel {
    ListViewModel {
        id: record.id.clone(),
        title: record.title.clone(),
        path: record.path.clone(),
        description: record.description.clone(),
        date: Some(format_date(&record.date, format.pattern())),
        read_time_minutes: record.read_time_minutes,
        background_style: record.background_style.clone(),
        excerpt: record.excerpt.clone(),
    }
}

/// Project an ordered sequence of records, keeping the order
pub fn project_all<'a, I>(records: I, format: &DateFormat) -> Vec<ListViewModel>
where
    I: IntoIterator<Item = &'a ContentRecord>,
{
    records.into_iter().map(|r| project(r, format)).collect()
}
