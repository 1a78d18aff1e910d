//! HTTP API server

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::auth::{require_auth, Maker};
use crate::config::Config;
use crate::error::Result;

use super::routes;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub token_maker: Arc<dyn Maker>,
}

impl AppState {
    /// Validate the config and build the token maker it names
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let token_maker = config.token.build_maker()?;
        Ok(Self {
            config: Arc::new(config),
            token_maker,
        })
    }
}

/// Run the HTTP API server
pub async fn run_server(config: Config) -> Result<()> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let kind = config.token.kind;

    let state = AppState::new(config)?;
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {} ({} tokens)", addr, kind);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the router with all routes
pub fn create_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/api/me", get(routes::me))
        .route_layer(middleware::from_fn_with_state(
            state.token_maker.clone(),
            require_auth,
        ));

    Router::new()
        .route("/api/health", get(routes::health))
        .route("/api/tokens/renew_access", post(routes::renew_access_token))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
