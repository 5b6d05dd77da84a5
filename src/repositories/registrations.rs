//! Registration aggregation queries.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::errors::AppError;

/// Raw aggregation row: one distinct registration date and its count.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: i64,
}

/// Read-only aggregation over the user-record store.
///
/// Implementations must group user records by the date portion of their
/// creation timestamp, restricted to dates on or after `start_date`
/// (no upper bound), and return the groups ascending by date. Store
/// failures propagate unchanged; there is no retry at this layer.
#[async_trait]
pub trait RegistrationAggregator: Send + Sync {
    async fn count_by_date(&self, start_date: NaiveDate) -> Result<Vec<DailyCount>, AppError>;
}

/// PostgreSQL-backed aggregator over the `users` table.
#[derive(Debug, Clone)]
pub struct PgRegistrationAggregator {
    pool: PgPool,
}

impl PgRegistrationAggregator {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RegistrationAggregator for PgRegistrationAggregator {
    async fn count_by_date(&self, start_date: NaiveDate) -> Result<Vec<DailyCount>, AppError> {
        let rows = sqlx::query_as::<_, DailyCount>(
            r#"
            SELECT created_at::date AS date, COUNT(*) AS count
            FROM users
            WHERE created_at::date >= $1
            GROUP BY created_at::date
            ORDER BY created_at::date ASC
            "#,
        )
        .bind(start_date)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
