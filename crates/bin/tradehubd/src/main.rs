//! # tradehubd — tradehub daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct repository implementations (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Spawn the audit task that persists published account events
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;

use tokio_stream::StreamExt;
use tokio_stream::wrappers::BroadcastStream;
use tracing_subscriber::EnvFilter;

use tradehub_adapter_catalog::StaticCatalog;
use tradehub_adapter_http_axum::state::AppState;
use tradehub_adapter_storage_sqlite_sqlx::{SqliteAccountRepository, SqliteEventStore};
use tradehub_app::event_bus::InProcessEventBus;
use tradehub_app::ports::EventStore;
use tradehub_app::services::account_service::AccountService;
use tradehub_app::services::catalog_service::CatalogService;
use tradehub_domain::event::AccountEvent;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Database
    let db = tradehub_adapter_storage_sqlite_sqlx::Config {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await?;
    let pool = db.pool().clone();

    // Repositories
    let account_repo = SqliteAccountRepository::new(pool.clone());
    let event_store = Arc::new(SqliteEventStore::new(pool));

    // Event bus + audit task persisting published events
    let event_bus = InProcessEventBus::new(256);
    spawn_audit_task(event_bus.subscribe(), Arc::clone(&event_store));

    // Services
    let account_service = Arc::new(AccountService::new(account_repo, event_bus));
    let catalog_service = Arc::new(CatalogService::new(StaticCatalog::new()));

    // HTTP
    let state = AppState::from_arcs(account_service, catalog_service, event_store);
    let app = tradehub_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!(%bind_addr, "tradehubd listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Copy events from the in-process bus into the persistent audit log.
fn spawn_audit_task(
    receiver: tokio::sync::broadcast::Receiver<AccountEvent>,
    store: Arc<SqliteEventStore>,
) {
    tokio::spawn(async move {
        let mut stream = BroadcastStream::new(receiver);
        while let Some(event) = stream.next().await {
            match event {
                Ok(event) => {
                    if let Err(err) = store.store(event).await {
                        tracing::error!(error = %err, "failed to persist account event");
                    }
                }
                Err(err) => {
                    tracing::warn!(error = %err, "audit subscriber lagged; events skipped");
                }
            }
        }
    });
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
