//! In-process tests for the expense tracker routes.
//!
//! The expense service gets an in-memory store; the pool in `AppState` is
//! built lazily and never touched.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use chrono::{NaiveDate, Utc};
use serde_json::Value;
use sqlx::PgPool;
use tower::util::ServiceExt;
use uuid::Uuid;

use moneymap::config::AppConfig;
use moneymap::errors::AppError;
use moneymap::models::expense::{Expense, ExpenseRequest};
use moneymap::repositories::expenses::ExpenseStore;
use moneymap::repositories::registrations::PgRegistrationAggregator;
use moneymap::services::expenses::ExpenseService;
use moneymap::services::stats::StatsService;
use moneymap::{app, AppState};

#[derive(Default)]
struct FakeStore {
    rows: Mutex<Vec<Expense>>,
}

#[async_trait]
impl ExpenseStore for FakeStore {
    async fn list_all(&self) -> Result<Vec<Expense>, AppError> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn insert(&self, input: &ExpenseRequest) -> Result<Expense, AppError> {
        let row = Expense {
            id: Uuid::new_v4(),
            description: input.description.clone(),
            amount: input.amount,
            payment_mode: input.payment_mode.clone(),
            date: input.date,
            created_at: Utc::now(),
        };
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn update(&self, id: Uuid, input: &ExpenseRequest) -> Result<bool, AppError> {
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|e| e.id == id) {
            Some(row) => {
                row.description = input.description.clone();
                row.amount = input.amount;
                row.payment_mode = input.payment_mode.clone();
                row.date = input.date;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|e| e.id != id);
        Ok(rows.len() < before)
    }

    async fn total_amount(&self) -> Result<f64, AppError> {
        Ok(self.rows.lock().unwrap().iter().map(|e| e.amount).sum())
    }

    async fn filter_by_amount(&self, min: f64, max: f64) -> Result<Vec<Expense>, AppError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.amount >= min && e.amount <= max)
            .cloned()
            .collect())
    }

    async fn filter_by_date(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Expense>, AppError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.date >= from && e.date <= to)
            .cloned()
            .collect())
    }

    async fn filter_by_payment_mode(&self, mode: &str) -> Result<Vec<Expense>, AppError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.payment_mode == mode)
            .cloned()
            .collect())
    }
}

fn expense(description: &str, amount: f64, mode: &str, date: &str) -> Expense {
    Expense {
        id: Uuid::new_v4(),
        description: description.to_string(),
        amount,
        payment_mode: mode.to_string(),
        date: date.parse().unwrap(),
        created_at: Utc::now(),
    }
}

fn test_app(rows: Vec<Expense>) -> Router {
    let config = AppConfig {
        database_url: "postgres://localhost:5432/unused".to_string(),
        database_max_connections: 1,
        host: "127.0.0.1".to_string(),
        port: 0,
        jwt_secret: "test-jwt-secret".to_string(),
        jwt_expiry_secs: 900,
    };
    let db = PgPool::connect_lazy(&config.database_url).expect("lazy pool");
    let stats = StatsService::new(Arc::new(PgRegistrationAggregator::new(db.clone())));
    let expenses = ExpenseService::new(Arc::new(FakeStore {
        rows: Mutex::new(rows),
    }));

    app(AppState {
        db,
        config,
        stats,
        expenses,
    })
}

fn request(method: Method, uri: &str, json_body: Option<&str>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);
    match json_body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn all_expenses_are_serialized_camel_case() {
    let app = test_app(vec![expense("Groceries", 42.5, "Cash", "2024-01-03")]);

    let response = app
        .oneshot(request(Method::GET, "/allExpense", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json[0]["description"], "Groceries");
    assert_eq!(json[0]["paymentMode"], "Cash");
    assert_eq!(json[0]["date"], "2024-01-03");
    assert_eq!(json[0]["amount"], 42.5);
}

#[tokio::test]
async fn add_expense_answers_with_plain_text() {
    let app = test_app(vec![]);

    let response = app
        .clone()
        .oneshot(request(
            Method::POST,
            "/addExpense",
            Some(r#"{"description":"Bus ticket","amount":3.2,"paymentMode":"UPI","date":"2024-01-05"}"#),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "Expense added successfully");

    let response = app
        .oneshot(request(Method::GET, "/allExpense", None))
        .await
        .unwrap();
    let json: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn add_expense_rejects_negative_amounts() {
    let app = test_app(vec![]);

    let response = app
        .oneshot(request(
            Method::POST,
            "/addExpense",
            Some(r#"{"description":"Oops","amount":-5.0,"paymentMode":"Cash","date":"2024-01-05"}"#),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_unknown_expense_is_not_found() {
    let app = test_app(vec![]);

    let response = app
        .oneshot(request(
            Method::PUT,
            &format!("/update/{}", Uuid::new_v4()),
            Some(r#"{"description":"Rent","amount":900.0,"paymentMode":"Card","date":"2024-01-01"}"#),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_rewrites_the_row() {
    let row = expense("Rent", 900.0, "Card", "2024-01-01");
    let id = row.id;
    let app = test_app(vec![row]);

    let response = app
        .clone()
        .oneshot(request(
            Method::PUT,
            &format!("/update/{id}"),
            Some(r#"{"description":"Rent","amount":950.0,"paymentMode":"UPI","date":"2024-01-01"}"#),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "Expense updated successfully");

    let response = app
        .oneshot(request(Method::GET, "/allExpense", None))
        .await
        .unwrap();
    let json: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json[0]["amount"], 950.0);
    assert_eq!(json[0]["paymentMode"], "UPI");
}

#[tokio::test]
async fn delete_removes_the_row() {
    let row = expense("Groceries", 42.5, "Cash", "2024-01-03");
    let id = row.id;
    let app = test_app(vec![row]);

    let response = app
        .clone()
        .oneshot(request(Method::DELETE, &format!("/delete/{id}"), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "Expense deleted successfully");

    let response = app
        .oneshot(request(Method::GET, "/allExpense", None))
        .await
        .unwrap();
    let json: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json, serde_json::json!([]));
}

#[tokio::test]
async fn total_is_a_bare_number() {
    let app = test_app(vec![
        expense("A", 10.0, "Cash", "2024-01-01"),
        expense("B", 2.5, "Card", "2024-01-02"),
    ]);

    let response = app
        .oneshot(request(Method::GET, "/totalExpenses", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "12.5");
}

#[tokio::test]
async fn amount_filter_restricts_by_range() {
    let app = test_app(vec![
        expense("Cheap", 2.0, "Cash", "2024-01-01"),
        expense("Mid", 10.0, "Cash", "2024-01-02"),
        expense("Pricey", 99.0, "Card", "2024-01-03"),
    ]);

    let response = app
        .oneshot(request(
            Method::GET,
            "/amountFilter?minAmount=5&maxAmount=20",
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json: Value = serde_json::from_str(&body_text(response).await).unwrap();
    let descriptions: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["description"].as_str().unwrap())
        .collect();
    assert_eq!(descriptions, vec!["Mid"]);
}

#[tokio::test]
async fn date_filter_is_inclusive_on_both_ends() {
    let app = test_app(vec![
        expense("Before", 1.0, "Cash", "2023-12-31"),
        expense("Start", 2.0, "Cash", "2024-01-01"),
        expense("End", 3.0, "Cash", "2024-01-03"),
        expense("After", 4.0, "Cash", "2024-01-04"),
    ]);

    let response = app
        .oneshot(request(
            Method::GET,
            "/dateFilter?from=2024-01-01&to=2024-01-03",
            None,
        ))
        .await
        .unwrap();
    let json: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn payment_mode_filter_matches_exactly() {
    let app = test_app(vec![
        expense("Groceries", 42.5, "Cash", "2024-01-01"),
        expense("Rent", 900.0, "Card", "2024-01-02"),
    ]);

    let response = app
        .oneshot(request(Method::GET, "/paymentMode?paymentMode=Card", None))
        .await
        .unwrap();
    let json: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["description"], "Rent");
}

#[tokio::test]
async fn amount_filter_requires_both_bounds() {
    let app = test_app(vec![]);

    let response = app
        .oneshot(request(Method::GET, "/amountFilter?minAmount=5", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
