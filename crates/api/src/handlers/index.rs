use std::io::ErrorKind;

use axum::extract::State;
use axum::response::Html;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /
///
/// Serve the configured `index.html` if it exists, otherwise the built-in page.
pub async fn index(State(state): State<AppState>) -> AppResult<Html<String>> {
    let path = &state.config.index_template;

    match tokio::fs::read_to_string(path).await {
        Ok(page) => {
            tracing::info!(path = %path.display(), "Serving index.html from template");
            Ok(Html(page))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!("Serving built-in index.html");
            Ok(Html(state.index_page.to_string()))
        }
        Err(e) => Err(AppError::InternalError(format!(
            "Failed to read index template {}: {e}",
            path.display()
        ))),
    }
}
