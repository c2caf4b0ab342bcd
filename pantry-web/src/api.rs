//! Client-side adapter for the recipe generation endpoint.
//!
//! One POST per user-triggered generation, no retries. All failure modes are
//! collapsed into a user-facing message string here; the rendering layer
//! never sees status codes or error structures.

use pantry_core::models::{GenerateRequest, Recipe};
use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;

pub const GENERATE_ENDPOINT: &str = "/api/generate-recipes";

const MSG_NO_INGREDIENTS: &str = "Please add at least one ingredient.";
const MSG_UNREACHABLE: &str =
    "We couldn't reach the recipe service. Please check your connection and try again.";
const MSG_UNKNOWN_SERVER_ERROR: &str = "An unknown error occurred on the server.";
const MSG_UNEXPECTED_RESPONSE: &str = "The server returned an unexpected response.";
const MSG_INVALID_FORMAT: &str =
    "Received an invalid recipe format from the AI. Please try again.";

/// Request a recipe set for the given ingredients and cuisine.
///
/// An empty ingredient list is rejected locally; no network request is made.
pub async fn generate(ingredients: &[String], cuisine: &str) -> Result<Vec<Recipe>, String> {
    if ingredients.is_empty() {
        return Err(MSG_NO_INGREDIENTS.to_string());
    }

    let body = GenerateRequest {
        ingredients: ingredients.to_vec(),
        cuisine: cuisine.to_string(),
    };

    let response = reqwest::Client::new()
        .post(endpoint_url()?)
        .json(&body)
        .send()
        .await
        .map_err(|_| MSG_UNREACHABLE.to_string())?;

    let status = response.status();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let text = response
        .text()
        .await
        .map_err(|_| MSG_UNREACHABLE.to_string())?;

    interpret_response(status, content_type.as_deref(), &text)
}

/// The fetch API needs an absolute URL, so resolve the well-known relative
/// path against the page origin.
fn endpoint_url() -> Result<String, String> {
    let window = web_sys::window().ok_or_else(|| MSG_UNREACHABLE.to_string())?;
    let origin = window
        .location()
        .origin()
        .map_err(|_| MSG_UNREACHABLE.to_string())?;
    Ok(format!("{origin}{GENERATE_ENDPOINT}"))
}

/// Classify a settled HTTP exchange into recipes or a failure message.
///
/// - success + valid recipe array: the decoded set (fully validated, not
///   just "is it an array");
/// - non-success + JSON body: the embedded `error` message;
/// - non-success + anything else: the HTTP status text (platform error pages
///   are not JSON);
/// - success + undecodable body: a generic invalid-format message.
fn interpret_response(
    status: StatusCode,
    content_type: Option<&str>,
    body: &str,
) -> Result<Vec<Recipe>, String> {
    if !status.is_success() {
        if content_type.is_some_and(|ct| ct.contains("application/json")) {
            let message = serde_json::from_str::<serde_json::Value>(body)
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_owned));
            return Err(message.unwrap_or_else(|| MSG_UNKNOWN_SERVER_ERROR.to_string()));
        }
        return Err(status
            .canonical_reason()
            .unwrap_or(MSG_UNEXPECTED_RESPONSE)
            .to_string());
    }

    serde_json::from_str::<Vec<Recipe>>(body).map_err(|_| MSG_INVALID_FORMAT.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pantry_core::models::Difficulty;

    const RECIPE_JSON: &str = r#"{
        "recipeName": "Shakshuka",
        "description": "Eggs poached in spiced tomato sauce.",
        "prepTime": "30 minutes",
        "difficulty": "Easy",
        "ingredients": ["eggs", "tomatoes", "onion"],
        "instructions": ["Simmer the sauce.", "Poach the eggs in it."],
        "cuisineOrigin": {
            "fact": "Shakshuka is a staple across North Africa and the Levant.",
            "learnMoreLink": "https://en.wikipedia.org/wiki/Shakshouka"
        },
        "nutritionInfo": { "calories": "350 kcal", "protein": "19g" },
        "imageUrl": "https://example.com/shakshuka.jpg"
    }"#;

    #[test]
    fn test_success_round_trips_the_recipe_set() {
        let body = format!("[{RECIPE_JSON}, {RECIPE_JSON}]");
        let recipes =
            interpret_response(StatusCode::OK, Some("application/json"), &body).unwrap();
        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].recipe_name, "Shakshuka");
        assert_eq!(recipes[0].difficulty, Difficulty::Easy);
        assert_eq!(recipes[1], recipes[0]);
    }

    #[test]
    fn test_json_error_body_message_is_surfaced_verbatim() {
        let err = interpret_response(
            StatusCode::BAD_REQUEST,
            Some("application/json"),
            r#"{"error":"Ingredients are required."}"#,
        )
        .unwrap_err();
        assert_eq!(err, "Ingredients are required.");
    }

    #[test]
    fn test_json_error_body_without_message_falls_back() {
        let err = interpret_response(
            StatusCode::BAD_REQUEST,
            Some("application/json"),
            r#"{"detail":"nope"}"#,
        )
        .unwrap_err();
        assert_eq!(err, MSG_UNKNOWN_SERVER_ERROR);
    }

    #[test]
    fn test_non_json_error_body_uses_status_text() {
        let err = interpret_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            Some("text/html"),
            "<html>Internal Server Error</html>",
        )
        .unwrap_err();
        assert_eq!(err, "Internal Server Error");
    }

    #[test]
    fn test_error_without_content_type_uses_status_text() {
        let err = interpret_response(StatusCode::NOT_FOUND, None, "").unwrap_err();
        assert_eq!(err, "Not Found");
    }

    #[test]
    fn test_unparsable_success_body_is_invalid_format() {
        let err =
            interpret_response(StatusCode::OK, Some("application/json"), "not json").unwrap_err();
        assert_eq!(err, MSG_INVALID_FORMAT);
    }

    #[test]
    fn test_success_with_wrong_shape_is_invalid_format() {
        let err = interpret_response(
            StatusCode::OK,
            Some("application/json"),
            r#"{"recipes": []}"#,
        )
        .unwrap_err();
        assert_eq!(err, MSG_INVALID_FORMAT);
    }
}
