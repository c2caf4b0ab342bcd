//! The response schema sent to the provider.
//!
//! Gemini accepts an OpenAPI-style schema in `generationConfig.responseSchema`
//! and constrains its output to it. This is a request-time hint, not a
//! guarantee; [`crate::gemini::parse_recipes`] re-validates everything.

use serde_json::{Value, json};

/// Schema for a single recipe object.
#[must_use]
pub fn recipe_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "recipeName": { "type": "STRING" },
            "description": { "type": "STRING" },
            "prepTime": { "type": "STRING" },
            "difficulty": { "type": "STRING", "enum": ["Easy", "Medium", "Hard"] },
            "ingredients": { "type": "ARRAY", "items": { "type": "STRING" } },
            "instructions": { "type": "ARRAY", "items": { "type": "STRING" } },
            "cuisineOrigin": {
                "type": "OBJECT",
                "properties": {
                    "fact": { "type": "STRING" },
                    "learnMoreLink": { "type": "STRING" }
                },
                "required": ["fact", "learnMoreLink"]
            },
            "nutritionInfo": {
                "type": "OBJECT",
                "properties": {
                    "calories": {
                        "type": "STRING",
                        "description": "Estimated calories per serving, e.g. '450 kcal'"
                    },
                    "protein": {
                        "type": "STRING",
                        "description": "Estimated protein per serving, e.g. '30g'"
                    }
                },
                "required": ["calories", "protein"]
            },
            "imageUrl": {
                "type": "STRING",
                "description": "A royalty-free image URL for the dish"
            }
        },
        "required": [
            "recipeName", "description", "prepTime", "difficulty",
            "ingredients", "instructions", "cuisineOrigin", "nutritionInfo",
            "imageUrl"
        ]
    })
}

/// Schema for the whole response: an array of recipe objects.
#[must_use]
pub fn response_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": recipe_schema(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_schema_is_an_array_of_recipes() {
        let schema = response_schema();
        assert_eq!(schema["type"], "ARRAY");
        assert_eq!(schema["items"]["type"], "OBJECT");
    }

    #[test]
    fn test_recipe_schema_requires_the_canonical_fields() {
        let schema = recipe_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        for field in [
            "recipeName",
            "difficulty",
            "cuisineOrigin",
            "nutritionInfo",
            "imageUrl",
        ] {
            assert!(required.contains(&field), "missing required field {field}");
        }
    }

    #[test]
    fn test_difficulty_enum_is_closed() {
        let schema = recipe_schema();
        assert_eq!(
            schema["properties"]["difficulty"]["enum"],
            json!(["Easy", "Medium", "Hard"])
        );
    }
}
