//! Persistence layer: data access for summary records.
//!
//! [`SummaryStore`] is the seam between the HTTP handlers and storage.
//! Every operation is a single round trip. "No row with this id" is
//! reported as `Ok(None)`; only genuine storage faults are errors.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::domain::{SummaryId, SummaryRecord, SummaryUrl};
use crate::error::ApiError;

pub use memory::MemorySummaryStore;
pub use postgres::PostgresSummaryStore;

/// Single-row CRUD over summary records.
#[async_trait]
pub trait SummaryStore: Send + Sync + std::fmt::Debug {
    /// Inserts a record with an empty summary and returns its new id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] on storage failure.
    async fn create(&self, url: &SummaryUrl) -> Result<SummaryId, ApiError>;

    /// Fetches a record by primary key.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] on storage failure.
    async fn read(&self, id: SummaryId) -> Result<Option<SummaryRecord>, ApiError>;

    /// Returns every record in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] on storage failure.
    async fn read_all(&self) -> Result<Vec<SummaryRecord>, ApiError>;

    /// Overwrites `url` and `summary` and returns the updated record.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] on storage failure.
    async fn update(
        &self,
        id: SummaryId,
        url: &SummaryUrl,
        summary: &str,
    ) -> Result<Option<SummaryRecord>, ApiError>;

    /// Removes a record and returns it as it was before deletion.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] on storage failure.
    async fn delete(&self, id: SummaryId) -> Result<Option<SummaryRecord>, ApiError>;
}
