//! Shepherd Server
//!
//! The server fronts the consultation platform: it authorizes each request,
//! runs lifecycle transitions through the engine, and persists the results
//! in the document store. It also serves the public site's news, donation,
//! and testimonial endpoints.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod state;

use std::sync::Arc;

use auth::{JwtConfig, JwtManager};
use axum::Router;
use consult_store::ConsultStore;
use summarizer::{HttpSummarizer, Summarizer};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::Config;
use crate::state::{create_shared_state, AppState};

/// Creates the application router with all routes configured.
pub fn create_app<S: ConsultStore + 'static>(state: Arc<AppState<S>>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let protected = api::protected_router().layer(axum::middleware::from_fn_with_state(
        state.clone(),
        middleware::auth_middleware::<S>,
    ));

    api::public_router()
        .merge(protected)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Creates the application state with the given configuration and store.
pub fn create_state<S: ConsultStore>(config: Config, store: S) -> Arc<AppState<S>> {
    let jwt_config =
        JwtConfig::new(&config.jwt_secret).with_expiration_hours(config.jwt_expiration_hours);
    let jwt_manager = JwtManager::new(jwt_config);

    let summarizer = config.summarizer_url.as_ref().map(|url| {
        let mut client = HttpSummarizer::new(url);
        if let Some(api_key) = &config.summarizer_api_key {
            client = client.with_api_key(api_key);
        }
        Arc::new(client) as Arc<dyn Summarizer>
    });

    create_shared_state(config, store, jwt_manager, summarizer)
}

/// Initializes tracing with the given log level.
pub fn init_tracing(log_level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
