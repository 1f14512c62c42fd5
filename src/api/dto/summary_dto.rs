//! Summary request and response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{SummaryId, SummaryRecord, SummaryUrl};

/// Request body for `POST /summaries/`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SummaryPayload {
    /// Absolute `http`/`https` URL to summarize.
    #[schema(value_type = String, example = "https://example.com/article")]
    pub url: SummaryUrl,
}

/// Request body for `PUT /summaries/{id}/`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SummaryUpdatePayload {
    /// Replacement URL.
    #[schema(value_type = String, example = "https://example.com/article")]
    pub url: SummaryUrl,
    /// Replacement summary text.
    pub summary: String,
}

/// Response body for `POST /summaries/` (201 Created).
#[derive(Debug, Serialize, ToSchema)]
pub struct SummaryCreatedResponse {
    /// Newly assigned record id.
    #[schema(value_type = i64, example = 1)]
    pub id: SummaryId,
    /// Normalized URL as stored.
    pub url: String,
}

/// Full record returned by read, list, update and delete.
#[derive(Debug, Serialize, ToSchema)]
pub struct SummaryResponse {
    /// Record id.
    #[schema(value_type = i64, example = 1)]
    pub id: SummaryId,
    /// Stored URL.
    pub url: String,
    /// Summary text, empty until updated.
    pub summary: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<SummaryRecord> for SummaryResponse {
    fn from(record: SummaryRecord) -> Self {
        Self {
            id: record.id,
            url: record.url,
            summary: record.summary,
            created_at: record.created_at,
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn payload_rejects_non_url() {
        let parsed: Result<SummaryPayload, _> = serde_json::from_str(r#"{"url": "not-a-url"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn payload_requires_url() {
        let parsed: Result<SummaryPayload, _> = serde_json::from_str("{}");
        assert!(parsed.is_err());
    }

    #[test]
    fn update_payload_requires_summary() {
        let parsed: Result<SummaryUpdatePayload, _> =
            serde_json::from_str(r#"{"url": "https://foo.bar"}"#);
        assert!(parsed.is_err());

        let parsed: Result<SummaryUpdatePayload, _> =
            serde_json::from_str(r#"{"url": "https://foo.bar", "summary": "updated!"}"#);
        let Ok(payload) = parsed else {
            panic!("valid update payload rejected");
        };
        assert_eq!(payload.summary, "updated!");
        assert_eq!(payload.url.as_str(), "https://foo.bar/");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let parsed: Result<SummaryPayload, _> =
            serde_json::from_str(r#"{"url": "https://foo.bar", "extra": true}"#);
        assert!(parsed.is_ok());
    }
}
