use std::net::SocketAddr;
use std::sync::Arc;

use mimalloc::MiMalloc;
use moneymap::config::AppConfig;
use moneymap::repositories::expenses::PgExpenseStore;
use moneymap::repositories::registrations::PgRegistrationAggregator;
use moneymap::services::expenses::ExpenseService;
use moneymap::services::stats::StatsService;
use moneymap::{app, db, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moneymap=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    let config = AppConfig::from_env()?;

    let pool = db::create_pool(&config.database_url, config.database_max_connections).await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let stats = StatsService::new(Arc::new(PgRegistrationAggregator::new(pool.clone())));
    let expenses = ExpenseService::new(Arc::new(PgExpenseStore::new(pool.clone())));
    let state = AppState {
        db: pool,
        config: config.clone(),
        stats,
        expenses,
    };

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    tracing::info!(host = %addr, "Starting MoneyMap API server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
