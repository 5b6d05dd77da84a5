pub mod config;
pub mod db;
pub mod errors;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

use axum::routing::{delete, get, post, put};
use axum::Router;
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::services::expenses::ExpenseService;
use crate::services::stats::StatsService;

/// Shared application state passed to all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: config::AppConfig,
    pub stats: StatsService,
    pub expenses: ExpenseService,
}

/// Build the full application router over the given state.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health/live", get(routes::health::live))
        .route("/health/ready", get(routes::health::ready))
        .route("/register", post(routes::auth::register))
        .route("/login", post(routes::auth::login))
        .route("/forgot-password", post(routes::auth::forgot_password))
        .route("/reset-password", post(routes::auth::reset_password))
        .route("/allExpense", get(routes::expenses::list_all))
        .route("/addExpense", post(routes::expenses::add))
        .route("/update/{id}", put(routes::expenses::update))
        .route("/delete/{id}", delete(routes::expenses::delete))
        .route("/totalExpenses", get(routes::expenses::total))
        .route("/amountFilter", get(routes::expenses::amount_filter))
        .route("/dateFilter", get(routes::expenses::date_filter))
        .route("/paymentMode", get(routes::expenses::payment_mode_filter))
        .route("/admin/users", get(routes::admin::list_users))
        .route("/admin/user/{id}", get(routes::admin::user_details))
        .route(
            "/admin/dashboard/users-per-day",
            get(routes::admin::users_per_day),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
