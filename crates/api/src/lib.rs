//! `api` crate — HTTP REST API layer for the clients resource.
//!
//! Exposes:
//!   GET    /clients
//!   GET    /clients/:id
//!   POST   /clients
//!   PUT    /clients/:id
//!   DELETE /clients/:id

pub mod error;
pub mod handlers;
pub mod messages;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub use error::ApiError;
pub use handlers::AppState;
pub use messages::{Locale, Messages};

/// Build the application router with every route and middleware attached.
pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/clients", handlers::client_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind to `bind` and serve until Ctrl-C is received.
pub async fn serve(bind: &str, state: AppState) -> std::io::Result<()> {
    let listener = TcpListener::bind(bind).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
