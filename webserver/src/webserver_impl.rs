//! Router assembly and the serve loop

use std::future::Future;
use std::net::SocketAddr;

use axum::middleware;
use axum::routing::{get, post, put};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use matchmaker::{DiscoveryIndex, SwipeStore};
use shared::component_info;

use crate::error::{WebServerError, WebServerResult};
use crate::state::AppState;
use crate::web::handlers::{discover, health, swipe, update_profile};
use crate::web::middleware::require_auth;

const COMPONENT: &str = "webserver";

pub struct WebServer<S, I> {
    state: AppState<S, I>,
}

impl<S, I> WebServer<S, I>
where
    S: SwipeStore + 'static,
    I: DiscoveryIndex + 'static,
{
    pub fn new(state: AppState<S, I>) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState<S, I> {
        &self.state
    }

    /// Build the Axum router with all routes
    ///
    /// `/health` is public; everything else requires a bearer token.
    pub fn build_router(&self) -> Router {
        let protected = Router::new()
            .route("/swipe", post(swipe::<S, I>))
            .route("/discover", post(discover::<S, I>))
            .route("/profile", put(update_profile::<S, I>))
            .route_layer(middleware::from_fn_with_state(self.state.clone(), require_auth::<S, I>));

        Router::new()
            .route("/health", get(health::<S, I>))
            .merge(protected)
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(CorsLayer::permissive()),
            )
            .with_state(self.state.clone())
    }

    /// Serve until `shutdown` resolves
    pub async fn run<F>(self, addr: SocketAddr, shutdown: F) -> WebServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| WebServerError::ServerStartup(format!("Failed to bind to {addr}: {e}")))?;

        component_info!(COMPONENT, "🌐 Listening on http://{}", addr);

        axum::serve(listener, self.build_router())
            .with_graceful_shutdown(shutdown)
            .await?;
        Ok(())
    }
}
