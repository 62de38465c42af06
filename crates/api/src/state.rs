use std::sync::Arc;

use akkhara_core::registry::Registry;

use crate::config::ServerConfig;
use crate::index;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Conversion registry, built once at startup and read-only afterwards.
    pub registry: Arc<Registry>,
    /// Built-in index page, rendered from the registry at startup.
    pub index_page: Arc<str>,
}

impl AppState {
    pub fn new(config: ServerConfig, registry: Registry) -> Self {
        let index_page = index::render_builtin(&registry);
        Self {
            config: Arc::new(config),
            registry: Arc::new(registry),
            index_page: Arc::from(index_page),
        }
    }
}
