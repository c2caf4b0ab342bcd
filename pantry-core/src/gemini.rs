//! Gemini provider adapter.
//!
//! One `generateContent` call per generation request: prompt plus the strict
//! response schema in, a JSON-encodable text blob out. No retries, no
//! fallback provider, no caching. The credential comes from server-side
//! configuration and is sent as a header, never in the URL.

use crate::config::Config;
use crate::error::GenerateError;
use crate::http::{get_client, strip_markdown_json};
use crate::models::Recipe;
use crate::prompt::build_prompt;
use crate::schema::response_schema;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Base URL for the Gemini API
const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: &'static str,
    #[serde(rename = "responseSchema")]
    response_schema: serde_json::Value,
}

#[derive(Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

/// Error body Gemini returns alongside non-success statuses.
#[derive(Deserialize)]
struct GeminiErrorResponse {
    error: GeminiErrorDetail,
}

#[derive(Deserialize)]
struct GeminiErrorDetail {
    message: String,
}

/// Generate the recipe set for the given ingredients and cuisine.
///
/// The caller is expected to have rejected an empty ingredient list already;
/// this re-checks it so the provider can never be hit with a prompt that has
/// nothing to work with.
pub async fn generate_recipes(
    ingredients: &[String],
    cuisine: &str,
    config: &Config,
) -> Result<Vec<Recipe>, GenerateError> {
    use std::time::Instant;

    if ingredients.is_empty() {
        return Err(GenerateError::MissingIngredients);
    }

    let prompt = build_prompt(ingredients, cuisine);
    let request = GeminiRequest {
        contents: vec![Content {
            parts: vec![Part { text: prompt }],
        }],
        generation_config: GenerationConfig {
            response_mime_type: "application/json",
            response_schema: response_schema(),
        },
    };

    let url = format!(
        "{API_BASE_URL}/models/{model}:generateContent",
        model = config.model
    );

    let start = Instant::now();
    let response = get_client()
        .post(&url)
        .header("x-goog-api-key", &config.gemini_api_key)
        .json(&request)
        .send()
        .await?;

    let duration_ms = start.elapsed().as_millis();
    let status = response.status();

    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<GeminiErrorResponse>(&text)
            .map(|e| e.error.message)
            .unwrap_or(text);
        warn!(
            status = %status,
            duration_ms = %duration_ms,
            message = %message,
            "Gemini API error"
        );
        return Err(GenerateError::ProviderApi {
            status: status.as_u16(),
            message,
        });
    }

    let body = response.text().await?;
    let gemini_response: GeminiResponse =
        serde_json::from_str(&body).map_err(GenerateError::MalformedResponse)?;
    let text = gemini_response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .and_then(|c| c.parts.into_iter().next())
        .map(|p| p.text)
        .unwrap_or_default();

    info!(
        model = %config.model,
        duration_ms = %duration_ms,
        "Gemini call completed"
    );

    parse_recipes(&text)
}

/// Validate and decode the provider's text into the recipe set.
///
/// The whole set parses or the request fails; partial results are never
/// returned. Distinguishes empty output, invalid JSON and a JSON value that
/// is not an array of schema-conforming recipes.
pub fn parse_recipes(text: &str) -> Result<Vec<Recipe>, GenerateError> {
    let cleaned = strip_markdown_json(text);
    if cleaned.trim().is_empty() {
        return Err(GenerateError::EmptyResponse);
    }

    let value: serde_json::Value =
        serde_json::from_str(cleaned).map_err(GenerateError::MalformedResponse)?;
    if !value.is_array() {
        // Fabricate a descriptive serde error for the log; the client only
        // ever sees the Display string.
        use serde::de::Error as _;
        let err = serde_json::Error::custom("expected a JSON array of recipes");
        return Err(GenerateError::UnexpectedShape(err));
    }

    serde_json::from_value(value).map_err(GenerateError::UnexpectedShape)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Difficulty;

    const VALID_RECIPE: &str = r#"{
        "recipeName": "Masala Omelette",
        "description": "A spiced breakfast staple across India.",
        "prepTime": "15 minutes",
        "difficulty": "Easy",
        "ingredients": ["eggs", "onion", "green chili"],
        "instructions": ["Whisk the eggs.", "Fry until set."],
        "cuisineOrigin": {
            "fact": "Omelettes reached India through colonial-era kitchens.",
            "learnMoreLink": "https://en.wikipedia.org/wiki/Omelette"
        },
        "nutritionInfo": { "calories": "280 kcal", "protein": "18g" },
        "imageUrl": "https://example.com/omelette.jpg"
    }"#;

    #[test]
    fn test_parse_valid_array() {
        let text = format!("[{VALID_RECIPE}, {VALID_RECIPE}]");
        let recipes = parse_recipes(&text).unwrap();
        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].recipe_name, "Masala Omelette");
        assert_eq!(recipes[0].difficulty, Difficulty::Easy);
    }

    #[test]
    fn test_parse_markdown_fenced_array() {
        let text = format!("```json\n[{VALID_RECIPE}]\n```");
        assert_eq!(parse_recipes(&text).unwrap().len(), 1);
    }

    #[test]
    fn test_empty_text_is_a_distinct_error() {
        assert!(matches!(parse_recipes(""), Err(GenerateError::EmptyResponse)));
        assert!(matches!(
            parse_recipes("   "),
            Err(GenerateError::EmptyResponse)
        ));
    }

    #[test]
    fn test_non_json_text_is_rejected() {
        let err = parse_recipes("not json").unwrap_err();
        assert!(matches!(err, GenerateError::MalformedResponse(_)));
        assert_eq!(err.status_code(), 500);
    }

    #[test]
    fn test_non_array_json_is_rejected() {
        let err = parse_recipes(r#"{"recipes": []}"#).unwrap_err();
        assert!(matches!(err, GenerateError::UnexpectedShape(_)));
    }

    #[test]
    fn test_partial_results_fail_the_whole_set() {
        // Second element is missing required fields: nothing is returned.
        let text = format!(r#"[{VALID_RECIPE}, {{"recipeName": "incomplete"}}]"#);
        assert!(matches!(
            parse_recipes(&text),
            Err(GenerateError::UnexpectedShape(_))
        ));
    }
}
