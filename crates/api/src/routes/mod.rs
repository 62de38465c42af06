pub mod health;
pub mod index;
pub mod process;

use axum::Router;

use crate::state::AppState;

/// Build the route tree.
///
/// ```text
/// GET  /         editor page
/// POST /process  text conversion
/// GET  /health   service health
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(index::router())
        .merge(process::router())
        .merge(health::router())
}
