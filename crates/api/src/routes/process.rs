use axum::routing::post;
use axum::Router;

use crate::handlers::process;
use crate::state::AppState;

/// ```text
/// POST /process -> process_text
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/process", post(process::process_text))
}
