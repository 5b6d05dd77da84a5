//! Expense persistence queries.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::expense::{Expense, ExpenseRequest};

/// Storage operations for expenses. Injected into the expense service so
/// tests can substitute an in-memory store.
#[async_trait]
pub trait ExpenseStore: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Expense>, AppError>;
    async fn insert(&self, input: &ExpenseRequest) -> Result<Expense, AppError>;
    /// Returns false when no row has that id.
    async fn update(&self, id: Uuid, input: &ExpenseRequest) -> Result<bool, AppError>;
    /// Returns false when no row has that id.
    async fn delete(&self, id: Uuid) -> Result<bool, AppError>;
    async fn total_amount(&self) -> Result<f64, AppError>;
    async fn filter_by_amount(&self, min: f64, max: f64) -> Result<Vec<Expense>, AppError>;
    async fn filter_by_date(&self, from: NaiveDate, to: NaiveDate)
        -> Result<Vec<Expense>, AppError>;
    async fn filter_by_payment_mode(&self, mode: &str) -> Result<Vec<Expense>, AppError>;
}

/// PostgreSQL-backed expense store.
#[derive(Debug, Clone)]
pub struct PgExpenseStore {
    pool: PgPool,
}

impl PgExpenseStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ExpenseStore for PgExpenseStore {
    async fn list_all(&self) -> Result<Vec<Expense>, AppError> {
        let rows = sqlx::query_as::<_, Expense>(
            "SELECT * FROM expenses ORDER BY date DESC, created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn insert(&self, input: &ExpenseRequest) -> Result<Expense, AppError> {
        let expense = sqlx::query_as::<_, Expense>(
            r#"
            INSERT INTO expenses (description, amount, payment_mode, date)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&input.description)
        .bind(input.amount)
        .bind(&input.payment_mode)
        .bind(input.date)
        .fetch_one(&self.pool)
        .await?;
        Ok(expense)
    }

    async fn update(&self, id: Uuid, input: &ExpenseRequest) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE expenses
            SET description = $1, amount = $2, payment_mode = $3, date = $4
            WHERE id = $5
            "#,
        )
        .bind(&input.description)
        .bind(input.amount)
        .bind(&input.payment_mode)
        .bind(input.date)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM expenses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn total_amount(&self) -> Result<f64, AppError> {
        let total = sqlx::query_scalar::<_, f64>(
            "SELECT COALESCE(SUM(amount), 0) FROM expenses",
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(total)
    }

    async fn filter_by_amount(&self, min: f64, max: f64) -> Result<Vec<Expense>, AppError> {
        let rows = sqlx::query_as::<_, Expense>(
            "SELECT * FROM expenses WHERE amount BETWEEN $1 AND $2 ORDER BY date DESC",
        )
        .bind(min)
        .bind(max)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn filter_by_date(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Expense>, AppError> {
        let rows = sqlx::query_as::<_, Expense>(
            "SELECT * FROM expenses WHERE date BETWEEN $1 AND $2 ORDER BY date DESC",
        )
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn filter_by_payment_mode(&self, mode: &str) -> Result<Vec<Expense>, AppError> {
        let rows = sqlx::query_as::<_, Expense>(
            "SELECT * FROM expenses WHERE payment_mode = $1 ORDER BY date DESC",
        )
        .bind(mode)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
