//! Application startup and lifecycle management.
//!
//! Builds the shared state, binds the listener, and serves the three-route
//! HTTP surface until the process is stopped.

use crate::config::Config;
use crate::error::AppError;
use crate::handlers;
use crate::services::PlayerDb;
use axum::{routing::any, Router};
use secrecy::ExposeSecret;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Shared application state. The database handle is injected here once at
/// build time; handlers never reach for globals.
#[derive(Clone)]
pub struct AppState {
    pub db: PlayerDb,
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    ///
    /// An unreachable database is a build error: the caller is expected to
    /// log it and exit rather than serve handlers that cannot answer.
    pub async fn build(config: Config) -> Result<Self, AppError> {
        let db = PlayerDb::connect(
            config.database.url.expose_secret(),
            &config.database.db_name,
        )
        .await?;

        let state = AppState { db };

        // Bind the listener up front (port 0 = random port for testing).
        let addr = format!("{}:{}", config.server.host, config.server.port);
        let listener = TcpListener::bind(&addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Player service listening on port {}", port);

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        // Each path is mounted as a prefix: the bare path and anything below
        // it reach the same handler, for any request method.
        let router = Router::new()
            .route("/node", any(handlers::node_version))
            .route("/node/*rest", any(handlers::node_version))
            .route("/mongo", any(handlers::mongo_version))
            .route("/mongo/*rest", any(handlers::mongo_version))
            .route("/data", any(handlers::list_players))
            .route("/data/*rest", any(handlers::list_players))
            .layer(TraceLayer::new_for_http())
            .with_state(self.state);

        axum::serve(self.listener, router).await
    }
}
