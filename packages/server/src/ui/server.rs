//! Server execution logic.

use std::{future::Future, sync::Arc};

use axum::{
    Router,
    routing::{get, post, put},
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::scheduler::Reaper;

use super::{
    handler::{
        delete_message, edit_message, health_check, list_messages, list_participants,
        post_message, refresh_heartbeat, register_participant,
    },
    signal::shutdown_signal,
    state::AppState,
};

/// Chat room HTTP server
///
/// Owns the request state and the background reaper. The reaper runs for as
/// long as the HTTP listener does and is stopped after the listener drains.
///
/// # Example
///
/// ```ignore
/// let server = Server::new(app_state, reaper);
/// server.run("127.0.0.1".to_string(), 5000).await?;
/// ```
pub struct Server {
    app_state: Arc<AppState>,
    reaper: Reaper,
}

impl Server {
    /// Create a new Server instance
    ///
    /// # Arguments
    ///
    /// * `app_state` - Use cases shared by every request handler
    /// * `reaper` - Background task evicting participants that stopped sending heartbeats
    pub fn new(app_state: AppState, reaper: Reaper) -> Self {
        Self {
            app_state: Arc::new(app_state),
            reaper,
        }
    }

    /// Build the HTTP router
    pub fn router(app_state: Arc<AppState>) -> Router {
        Router::new()
            .route(
                "/participants",
                post(register_participant).get(list_participants),
            )
            .route("/messages", post(post_message).get(list_messages))
            .route("/messages/{id}", put(edit_message).delete(delete_message))
            .route("/status", post(refresh_heartbeat))
            .route("/api/health", get(health_check))
            .layer(TraceLayer::new_for_http())
            .with_state(app_state)
    }

    /// Run the chat server until Ctrl+C or SIGTERM
    ///
    /// # Arguments
    ///
    /// * `host` - The host address to bind to (e.g., "127.0.0.1")
    /// * `port` - The port number to bind to (e.g., 5000)
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(
        self,
        host: String,
        port: u16,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let bind_addr = format!("{}:{}", host, port);
        let listener = TcpListener::bind(&bind_addr).await?;

        tracing::info!("Chat server listening on {}", listener.local_addr()?);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        self.serve(listener, shutdown_signal()).await
    }

    /// Serve on an already bound listener until `shutdown` resolves
    ///
    /// The reaper is started before the first request is accepted and is
    /// stopped once in-flight requests have completed.
    pub async fn serve<F>(
        self,
        listener: TcpListener,
        shutdown: F,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let reaper = self.reaper.spawn();
        let app = Self::router(self.app_state);

        let served = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await;

        reaper.shutdown().await;
        served?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}
