use sea_orm_migration::MigratorTrait;
use std::sync::Arc;
use tracker_db::AppState;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod api;
mod app;
mod config;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = config::ServerConfig::from_env();

    // Database connection
    let db_config = tracker_db::DatabaseConfig::from_env();
    tracing::info!("connecting to database...");
    let db = tracker_db::connect(&db_config)
        .await
        .expect("failed to connect to database");

    if config.run_migrations {
        tracing::info!("running database migrations...");
        tracker_migration::Migrator::up(&db, None)
            .await
            .expect("failed to run migrations");
        tracing::info!("migrations complete");
    }

    let state = Arc::new(AppState { db });
    let app = app::build_app(state, &config);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .expect("failed to bind listener");
    tracing::info!(addr = %config.bind_addr, "server started");

    axum::serve(listener, app).await.expect("server error");
}
