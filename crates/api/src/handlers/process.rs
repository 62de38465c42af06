//! Handler for `POST /process`, the text conversion endpoint.
//!
//! The request names its scripts with wire tokens. Anything the registry
//! cannot serve (unknown token, unregistered pair, refused pair) is still a
//! 200 response whose body explains the outcome; only an unparsable payload
//! is a client error.

use akkhara_core::registry::{ConversionKey, Outcome, Registry};
use akkhara_core::script::ScriptId;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, CONTENT_TYPE,
};
use axum::response::IntoResponse;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Body returned when no conversion is registered for the requested pair.
pub const NOT_FOUND_SENTINEL: &str = "func not found";

/// Request payload for `POST /process`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessRequest {
    pub text: String,
    pub input_selection: String,
    pub output_selection: String,
}

/// Resolve the request's scripts and run the conversion.
///
/// Unknown tokens take the same path as an unregistered pair.
pub fn dispatch(registry: &Registry, request: &ProcessRequest) -> Outcome {
    let source = request.input_selection.parse::<ScriptId>();
    let destination = request.output_selection.parse::<ScriptId>();

    match (source, destination) {
        (Ok(source), Ok(destination)) => {
            registry.convert(&request.text, ConversionKey::new(source, destination))
        }
        (Err(e), _) | (_, Err(e)) => {
            tracing::debug!(error = %e, "Unknown script in request");
            Outcome::NotFound
        }
    }
}

/// Wire form of an outcome.
pub fn render(outcome: Outcome) -> String {
    match outcome {
        Outcome::Converted(text) => text,
        Outcome::Refused(refusal) => refusal.reason().to_string(),
        Outcome::NotFound => NOT_FOUND_SENTINEL.to_string(),
    }
}

fn outcome_kind(outcome: &Outcome) -> &'static str {
    match outcome {
        Outcome::Converted(_) => "converted",
        Outcome::Refused(_) => "refused",
        Outcome::NotFound => "not_found",
    }
}

/// POST /process
///
/// Convert `text` from `inputSelection` to `outputSelection` and return the
/// result as plain text. The allowed methods and headers ride on every
/// response, not only on preflight replies; the origin is left to the CORS
/// layer.
pub async fn process_text(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    tracing::debug!("Received text processing request");

    let request: ProcessRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::error!(error = %e, "Invalid JSON data");
        AppError::BadRequest("Invalid JSON data".into())
    })?;

    let outcome = dispatch(&state.registry, &request);

    tracing::debug!(
        input = %request.input_selection,
        output = %request.output_selection,
        outcome = outcome_kind(&outcome),
        "Processed text",
    );

    Ok((
        [
            (CONTENT_TYPE, "text/plain; charset=utf-8"),
            (ACCESS_CONTROL_ALLOW_METHODS, "POST"),
            (ACCESS_CONTROL_ALLOW_HEADERS, "*"),
        ],
        render(outcome),
    ))
}
