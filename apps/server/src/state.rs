//! Application state.

use std::sync::Arc;

use auth::JwtManager;
use consult_store::ConsultStore;
use summarizer::Summarizer;

use crate::config::Config;

/// Shared application state.
pub struct AppState<S: ConsultStore> {
    /// Server configuration.
    pub config: Config,
    /// Document store.
    pub store: S,
    /// JWT manager.
    pub jwt_manager: JwtManager,
    /// Summarization collaborator, if configured.
    pub summarizer: Option<Arc<dyn Summarizer>>,
}

impl<S: ConsultStore> AppState<S> {
    /// Creates new application state.
    pub fn new(
        config: Config,
        store: S,
        jwt_manager: JwtManager,
        summarizer: Option<Arc<dyn Summarizer>>,
    ) -> Self {
        Self {
            config,
            store,
            jwt_manager,
            summarizer,
        }
    }
}

/// Type alias for shared state.
pub type SharedState<S> = Arc<AppState<S>>;

/// Creates shared state from its parts.
pub fn create_shared_state<S: ConsultStore>(
    config: Config,
    store: S,
    jwt_manager: JwtManager,
    summarizer: Option<Arc<dyn Summarizer>>,
) -> SharedState<S> {
    Arc::new(AppState::new(config, store, jwt_manager, summarizer))
}
