//! Expense tracker routes.
//!
//! Mutations answer with plain-text confirmations and `/totalExpenses`
//! with a bare number, which is what the dashboard client parses.

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::errors::AppError;
use crate::models::expense::{Expense, ExpenseRequest};
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmountFilterQuery {
    pub min_amount: f64,
    pub max_amount: f64,
}

#[derive(Debug, Deserialize)]
pub struct DateFilterQuery {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentModeQuery {
    pub payment_mode: String,
}

/// GET /allExpense — every expense, newest first.
pub async fn list_all(State(state): State<AppState>) -> Result<Json<Vec<Expense>>, AppError> {
    Ok(Json(state.expenses.list_all().await?))
}

/// POST /addExpense
pub async fn add(
    State(state): State<AppState>,
    Json(body): Json<ExpenseRequest>,
) -> Result<String, AppError> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    state.expenses.add(&body).await?;
    Ok("Expense added successfully".to_string())
}

/// PUT /update/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<ExpenseRequest>,
) -> Result<String, AppError> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    state.expenses.update(id, &body).await?;
    Ok("Expense updated successfully".to_string())
}

/// DELETE /delete/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<String, AppError> {
    state.expenses.delete(id).await?;
    Ok("Expense deleted successfully".to_string())
}

/// GET /totalExpenses — the sum of all amounts as a bare number.
pub async fn total(State(state): State<AppState>) -> Result<String, AppError> {
    let total = state.expenses.total().await?;
    Ok(total.to_string())
}

/// GET /amountFilter?minAmount=&maxAmount=
pub async fn amount_filter(
    State(state): State<AppState>,
    Query(query): Query<AmountFilterQuery>,
) -> Result<Json<Vec<Expense>>, AppError> {
    let rows = state
        .expenses
        .filter_by_amount(query.min_amount, query.max_amount)
        .await?;
    Ok(Json(rows))
}

/// GET /dateFilter?from=&to=
pub async fn date_filter(
    State(state): State<AppState>,
    Query(query): Query<DateFilterQuery>,
) -> Result<Json<Vec<Expense>>, AppError> {
    let rows = state.expenses.filter_by_date(query.from, query.to).await?;
    Ok(Json(rows))
}

/// GET /paymentMode?paymentMode=
pub async fn payment_mode_filter(
    State(state): State<AppState>,
    Query(query): Query<PaymentModeQuery>,
) -> Result<Json<Vec<Expense>>, AppError> {
    let rows = state
        .expenses
        .filter_by_payment_mode(&query.payment_mode)
        .await?;
    Ok(Json(rows))
}
