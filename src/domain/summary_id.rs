//! Type-safe summary record identifier.
//!
//! [`SummaryId`] is a newtype wrapper around the `BIGSERIAL` primary key of
//! the `textsummary` table. It is always positive: ids are generated by the
//! store, and ids arriving from clients are checked with
//! [`SummaryId::try_from_raw`] before any lookup happens.

use std::fmt;

use serde::Serialize;

use crate::error::ApiError;

/// Unique identifier for a summary record.
///
/// Generated once by the store at creation time and immutable thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SummaryId(i64);

impl SummaryId {
    /// Wraps a raw id without validation.
    ///
    /// Only the stores call this, with values produced by the database
    /// sequence or the in-memory counter.
    #[must_use]
    pub(crate) const fn from_db(raw: i64) -> Self {
        Self(raw)
    }

    /// Validates a client-supplied id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidSummaryId`] if `raw` is zero or negative.
    pub fn try_from_raw(raw: i64) -> Result<Self, ApiError> {
        if raw > 0 {
            Ok(Self(raw))
        } else {
            Err(ApiError::InvalidSummaryId(format!(
                "id must be greater than 0, got {raw}"
            )))
        }
    }

    /// Returns the inner integer.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for SummaryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<SummaryId> for i64 {
    fn from(id: SummaryId) -> Self {
        id.0
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn positive_ids_are_accepted() {
        let Ok(id) = SummaryId::try_from_raw(42) else {
            panic!("42 is a valid id");
        };
        assert_eq!(id.get(), 42);
    }

    #[test]
    fn zero_and_negative_ids_are_rejected() {
        assert!(matches!(
            SummaryId::try_from_raw(0),
            Err(ApiError::InvalidSummaryId(_))
        ));
        assert!(matches!(
            SummaryId::try_from_raw(-7),
            Err(ApiError::InvalidSummaryId(_))
        ));
    }

    #[test]
    fn serializes_as_plain_integer() {
        let json = serde_json::to_string(&SummaryId::from_db(5)).unwrap_or_default();
        assert_eq!(json, "5");
    }

    #[test]
    fn display_matches_inner_value() {
        assert_eq!(SummaryId::from_db(123).to_string(), "123");
    }

    #[test]
    fn ordering_follows_inner_value() {
        assert!(SummaryId::from_db(1) < SummaryId::from_db(2));
    }
}
