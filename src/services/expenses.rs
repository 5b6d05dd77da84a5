//! Expense tracking: CRUD, totals, and server-side filters.

use std::sync::Arc;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::expense::{Expense, ExpenseRequest};
use crate::repositories::expenses::ExpenseStore;

/// Thin service over the expense store, injected at startup.
#[derive(Clone)]
pub struct ExpenseService {
    store: Arc<dyn ExpenseStore>,
}

impl ExpenseService {
    pub fn new(store: Arc<dyn ExpenseStore>) -> Self {
        Self { store }
    }

    pub async fn list_all(&self) -> Result<Vec<Expense>, AppError> {
        self.store.list_all().await
    }

    pub async fn add(&self, input: &ExpenseRequest) -> Result<Expense, AppError> {
        self.store.insert(input).await
    }

    pub async fn update(&self, id: Uuid, input: &ExpenseRequest) -> Result<(), AppError> {
        if !self.store.update(id, input).await? {
            return Err(AppError::NotFound("Expense not found".to_string()));
        }
        Ok(())
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !self.store.delete(id).await? {
            return Err(AppError::NotFound("Expense not found".to_string()));
        }
        Ok(())
    }

    /// Sum of all expense amounts; zero when the store is empty.
    pub async fn total(&self) -> Result<f64, AppError> {
        self.store.total_amount().await
    }

    pub async fn filter_by_amount(&self, min: f64, max: f64) -> Result<Vec<Expense>, AppError> {
        self.store.filter_by_amount(min, max).await
    }

    pub async fn filter_by_date(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Expense>, AppError> {
        self.store.filter_by_date(from, to).await
    }

    pub async fn filter_by_payment_mode(&self, mode: &str) -> Result<Vec<Expense>, AppError> {
        self.store.filter_by_payment_mode(mode).await
    }
}
