//! PostgreSQL implementation of the summary store.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use super::SummaryStore;
use crate::config::ServiceConfig;
use crate::domain::{SummaryId, SummaryRecord, SummaryUrl};
use crate::error::ApiError;

type SummaryRow = (i64, String, String, DateTime<Utc>);

// Casts keep decoding stable on tables created with an `INTEGER` id and a
// zone-less `TIMESTAMP`; sqlx sessions run in UTC, so naive values read as UTC.
const SUMMARY_COLUMNS: &str =
    "id::BIGINT AS id, url, summary, created_at::TIMESTAMPTZ AS created_at";

/// PostgreSQL-backed store using `sqlx::PgPool`.
#[derive(Debug, Clone)]
pub struct PostgresSummaryStore {
    pool: PgPool,
}

impl PostgresSummaryStore {
    /// Creates a new store over the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a connection pool sized from `config`.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`sqlx::Error`] if the database is unreachable.
    pub async fn connect(config: &ServiceConfig) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(config.database_max_connections)
            .min_connections(config.database_min_connections)
            .acquire_timeout(Duration::from_secs(config.database_connect_timeout_secs))
            .connect(&config.database_url)
            .await?;
        Ok(Self::new(pool))
    }

    /// Creates the `textsummary` table if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns a [`sqlx::migrate::MigrateError`] if a migration fails.
    pub async fn init_schema(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await
    }

    /// Closes every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl SummaryStore for PostgresSummaryStore {
    async fn create(&self, url: &SummaryUrl) -> Result<SummaryId, ApiError> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO textsummary (url, summary, created_at) VALUES ($1, '', NOW()) \
             RETURNING id::BIGINT",
        )
        .bind(url.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(SummaryId::from_db(id))
    }

    async fn read(&self, id: SummaryId) -> Result<Option<SummaryRecord>, ApiError> {
        let row = sqlx::query_as::<_, SummaryRow>(&format!(
            "SELECT {SUMMARY_COLUMNS} FROM textsummary WHERE id = $1"
        ))
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(SummaryRecord::from_row))
    }

    async fn read_all(&self) -> Result<Vec<SummaryRecord>, ApiError> {
        let rows = sqlx::query_as::<_, SummaryRow>(&format!(
            "SELECT {SUMMARY_COLUMNS} FROM textsummary ORDER BY id ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(SummaryRecord::from_row).collect())
    }

    async fn update(
        &self,
        id: SummaryId,
        url: &SummaryUrl,
        summary: &str,
    ) -> Result<Option<SummaryRecord>, ApiError> {
        let row = sqlx::query_as::<_, SummaryRow>(&format!(
            "UPDATE textsummary SET url = $1, summary = $2 WHERE id = $3 \
             RETURNING {SUMMARY_COLUMNS}"
        ))
        .bind(url.as_str())
        .bind(summary)
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(SummaryRecord::from_row))
    }

    async fn delete(&self, id: SummaryId) -> Result<Option<SummaryRecord>, ApiError> {
        let row = sqlx::query_as::<_, SummaryRow>(&format!(
            "DELETE FROM textsummary WHERE id = $1 RETURNING {SUMMARY_COLUMNS}"
        ))
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(SummaryRecord::from_row))
    }
}
