//! Content query - orders and limits content records for listings
//!
//! Records are sorted newest first. Records sharing a date keep the order in
//! which they were discovered, since front-matter dates carry no time of day.

use thiserror::Error;

use crate::content::ContentRecord;

/// Errors raised by a content query
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("invalid argument: limit must be non-negative, got {limit}")]
    InvalidArgument { limit: i64 },
}

/// Return `records` sorted by date descending, truncated to `limit` when one
/// is given. The input is left untouched.
pub fn get_records(
    records: &[ContentRecord],
    limit: Option<i64>,
) -> Result<Vec<&ContentRecord>, QueryError> {
    let limit = limit.map(check_limit).transpose()?;

    let mut sorted: Vec<&ContentRecord> = records.iter().collect();
    // `sort_by` is stable, equal dates stay in discovery order
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    if let Some(limit) = limit {
        sorted.truncate(limit);
    }

    Ok(sorted)
}

fn check_limit(limit: i64) -> Result<usize, QueryError> {
    usize::try_from(limit).map_err(|_| QueryError::InvalidArgument { limit })
}
