//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use axum::{
    Router, http,
    http::{Method, header},
};
use backoffice::infra::mail::RelayNotifier as BackofficeRelayNotifier;
use backoffice::infra::postgres::PgBackofficeRepository;
use backoffice::{BackofficeConfig, backoffice_router};
use ledger::application::drain_outbox::DrainOutboxUseCase;
use ledger::domain::repository::OutboxRepository;
use ledger::infra::mail::RelayNotifier as LedgerRelayNotifier;
use ledger::infra::postgres::PgLedgerRepository;
use ledger::{LedgerConfig, ledger_router};
use platform::mailer::{Mailer, MailerConfig};
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,ledger=info,backoffice=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Mail relay configuration
    let mailer_config = if cfg!(debug_assertions) {
        MailerConfig::development()
    } else {
        // In production, the relay endpoint and credentials come from the environment
        MailerConfig {
            base_url: env::var("MAIL_RELAY_URL").expect("MAIL_RELAY_URL must be set in production"),
            api_key: env::var("MAIL_RELAY_API_KEY")
                .expect("MAIL_RELAY_API_KEY must be set in production"),
            from_email: env::var("MAIL_FROM_EMAIL")
                .expect("MAIL_FROM_EMAIL must be set in production"),
            from_name: env::var("MAIL_FROM_NAME")
                .unwrap_or_else(|_| "CryptoMiner ERP".to_string()),
            ..MailerConfig::default()
        }
    };
    let mailer = Mailer::new(mailer_config);

    let ledger_config = LedgerConfig::default();
    let ledger_repo = PgLedgerRepository::new(pool.clone());
    let ledger_notifier = LedgerRelayNotifier::new(mailer.clone());

    // Startup redelivery: drain notifications whose post-commit delivery
    // failed, then purge delivered rows past retention.
    // Errors here should not prevent server startup
    let drain = DrainOutboxUseCase::new(
        Arc::new(ledger_repo.clone()),
        Arc::new(ledger_notifier.clone()),
        Arc::new(ledger_config.clone()),
    );
    match drain.execute().await {
        Ok(output) => {
            tracing::info!(
                delivered = output.delivered,
                failed = output.failed,
                "Outbox drain completed"
            );
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                "Outbox drain failed, continuing anyway"
            );
        }
    }

    match ledger_repo.purge_delivered(ledger_config.outbox_retention).await {
        Ok(purged) => {
            tracing::info!(purged, "Outbox purge completed");
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                "Outbox purge failed, continuing anyway"
            );
        }
    }

    let backoffice_config = BackofficeConfig::default();
    let backoffice_repo = PgBackofficeRepository::new(pool.clone());
    let backoffice_notifier = BackofficeRelayNotifier::new(mailer.clone());

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Build router
    let app = Router::new()
        .nest(
            "/api/ledger",
            ledger_router(ledger_repo, ledger_notifier, ledger_config),
        )
        .nest(
            "/api/admin",
            backoffice_router(backoffice_repo, backoffice_notifier, backoffice_config),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], 31113));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
