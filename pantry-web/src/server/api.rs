//! The recipe generation proxy endpoint.
//!
//! Holds the provider credential so the client never sees it. Checks run in
//! a fixed order: credential, then request validation, then exactly one
//! provider call. Every failure leaves as `{"error": "..."}` with the status
//! from [`GenerateError::status_code`]; causes are logged here and go no
//! further.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pantry_core::models::GenerateRequest;
use pantry_core::{Config, GenerateError, gemini};
use serde_json::json;
use tracing::{error, info, warn};

/// `POST /api/generate-recipes`
pub async fn generate_recipes(Json(payload): Json<GenerateRequest>) -> Response {
    match super::config::get() {
        Ok(config) => run_generate(config, payload).await,
        Err(e) => {
            // Log the real cause; the client gets the generic message.
            error!(error = %e, "Provider credential missing");
            error_response(&GenerateError::NotConfigured)
        }
    }
}

async fn run_generate(config: &Config, payload: GenerateRequest) -> Response {
    use std::time::Instant;

    if payload.ingredients.is_empty() {
        warn!("Rejected generation request with no ingredients");
        return error_response(&GenerateError::MissingIngredients);
    }

    let start = Instant::now();
    let result = gemini::generate_recipes(&payload.ingredients, &payload.cuisine, config).await;
    let duration_ms = start.elapsed().as_millis();

    match result {
        Ok(recipes) => {
            info!(
                ingredients = payload.ingredients.len(),
                cuisine = %payload.cuisine,
                recipes = recipes.len(),
                duration_ms = %duration_ms,
                "Generation completed"
            );
            (StatusCode::OK, Json(recipes)).into_response()
        }
        Err(e) => {
            error!(
                ingredients = payload.ingredients.len(),
                cuisine = %payload.cuisine,
                error = ?e,
                duration_ms = %duration_ms,
                "Generation failed"
            );
            error_response(&e)
        }
    }
}

fn error_response(err: &GenerateError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(json!({ "error": err.to_string() }))).into_response()
}
