//! The persisted summary record.

use chrono::{DateTime, Utc};

use super::SummaryId;

/// One row of the `textsummary` table.
///
/// `id` and `created_at` are assigned by the store and never change;
/// `url` and `summary` are only replaced by an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRecord {
    /// Primary key.
    pub id: SummaryId,
    /// Normalized source URL, stored verbatim as text.
    pub url: String,
    /// Summary text; empty until a client updates it.
    pub summary: String,
    /// Server-side creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl SummaryRecord {
    /// Builds a record from a `(id, url, summary, created_at)` row tuple.
    #[must_use]
    pub(crate) fn from_row(
        (id, url, summary, created_at): (i64, String, String, DateTime<Utc>),
    ) -> Self {
        Self {
            id: SummaryId::from_db(id),
            url,
            summary,
            created_at,
        }
    }
}
