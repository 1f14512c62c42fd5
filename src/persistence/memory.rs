//! In-process summary store.
//!
//! Backs the service when `PERSISTENCE_ENABLED=false` and drives the HTTP
//! tests. Records live in a `BTreeMap` keyed by id, so iteration order is
//! insertion order, matching the PostgreSQL store.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::SummaryStore;
use crate::domain::{SummaryId, SummaryRecord, SummaryUrl};
use crate::error::ApiError;

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<SummaryId, SummaryRecord>,
    last_id: i64,
}

/// Summary store held entirely in memory.
///
/// A single [`RwLock`] guards the table; ids come from a counter that is
/// never reused, even after deletes.
#[derive(Debug, Default)]
pub struct MemorySummaryStore {
    table: RwLock<Table>,
}

impl MemorySummaryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored records.
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    /// Returns `true` if no records are stored.
    pub async fn is_empty(&self) -> bool {
        self.table.read().await.rows.is_empty()
    }
}

#[async_trait]
impl SummaryStore for MemorySummaryStore {
    async fn create(&self, url: &SummaryUrl) -> Result<SummaryId, ApiError> {
        let mut table = self.table.write().await;
        table.last_id = table
            .last_id
            .checked_add(1)
            .ok_or_else(|| ApiError::Persistence("summary id sequence exhausted".to_string()))?;
        let id = SummaryId::from_db(table.last_id);
        table.rows.insert(
            id,
            SummaryRecord {
                id,
                url: url.as_str().to_string(),
                summary: String::new(),
                created_at: Utc::now(),
            },
        );
        Ok(id)
    }

    async fn read(&self, id: SummaryId) -> Result<Option<SummaryRecord>, ApiError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn read_all(&self) -> Result<Vec<SummaryRecord>, ApiError> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn update(
        &self,
        id: SummaryId,
        url: &SummaryUrl,
        summary: &str,
    ) -> Result<Option<SummaryRecord>, ApiError> {
        let mut table = self.table.write().await;
        let Some(record) = table.rows.get_mut(&id) else {
            return Ok(None);
        };
        record.url = url.as_str().to_string();
        record.summary = summary.to_string();
        Ok(Some(record.clone()))
    }

    async fn delete(&self, id: SummaryId) -> Result<Option<SummaryRecord>, ApiError> {
        Ok(self.table.write().await.rows.remove(&id))
    }
}
