//! Expense model and request payloads.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Expense row as stored and as serialized to the API.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: Uuid,
    pub description: String,
    pub amount: f64,
    pub payment_mode: String,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Create/update payload for an expense.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRequest {
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    #[validate(range(min = 0.0, message = "amount must not be negative"))]
    pub amount: f64,
    #[validate(length(min = 1, message = "payment mode is required"))]
    pub payment_mode: String,
    pub date: NaiveDate,
}
