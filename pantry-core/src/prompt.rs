//! Prompt construction for recipe generation.
//!
//! One prompt per request, parameterized by the cuisine selection: "Global"
//! asks for a culturally diverse set, a named cuisine asks for dishes
//! authentic to it. The user's ingredient list is embedded literally.

use crate::models::{DEFAULT_CUISINE, RECIPE_COUNT};

/// Build the generation prompt for the given ingredients and cuisine.
#[must_use]
pub fn build_prompt(ingredients: &[String], cuisine: &str) -> String {
    let base = if cuisine == DEFAULT_CUISINE {
        format!(
            "You are a world-class chef and food historian specializing in global and regional \
             cuisines. Based on the following ingredients, generate {RECIPE_COUNT} diverse and \
             delicious recipes from different parts of the world. For each recipe: briefly \
             mention its origin or the cuisine it belongs to in the description; provide a \
             short, interesting historical or cultural fact about the cuisine; provide a valid, \
             relevant URL (e.g. a Wikipedia page or a reputable food blog) to learn more about \
             the cuisine; provide an estimated calorie count (e.g. \"450 kcal\") and protein \
             content (e.g. \"30g\") per serving; and provide a royalty-free image URL for the \
             dish."
        )
    } else {
        format!(
            "You are a world-class chef and food historian specializing in authentic {cuisine} \
             cuisine. Based on the following ingredients, generate {RECIPE_COUNT} delicious \
             {cuisine} recipes. For each recipe: briefly mention its significance or origin \
             within {cuisine} culture in the description; provide a short, interesting \
             historical or cultural fact about {cuisine} cuisine; provide a valid, relevant URL \
             (e.g. a Wikipedia page or a reputable food blog) to learn more about {cuisine} \
             cuisine; provide an estimated calorie count (e.g. \"450 kcal\") and protein \
             content (e.g. \"30g\") per serving; and provide a royalty-free image URL for the \
             dish."
        )
    };

    format!(
        r#"{base}

The user has these ingredients available: {ingredients}.
The recipes can include other common pantry staples.
Prioritize using the provided ingredients creatively. Be inventive and suggest dishes that offer a unique twist or are less commonly known, while still being accessible to a home cook.
IMPORTANT: For the 'difficulty' field in each recipe object, you MUST use one of the following exact string values: 'Easy', 'Medium', or 'Hard'.
Ensure the output is a valid JSON array of exactly {count} recipe objects that adheres to the provided schema."#,
        base = base,
        ingredients = ingredients.join(", "),
        count = RECIPE_COUNT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredients(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_prompt_embeds_comma_joined_ingredients() {
        let prompt = build_prompt(&ingredients(&["flour", "sugar", "eggs"]), "Global");
        assert!(prompt.contains("flour, sugar, eggs"));
    }

    #[test]
    fn test_global_prompt_has_no_named_cuisine_constraint() {
        let prompt = build_prompt(&ingredients(&["flour", "sugar", "eggs"]), "Global");
        assert!(prompt.contains("different parts of the world"));
        assert!(!prompt.contains("authentic"));
    }

    #[test]
    fn test_named_cuisine_prompt_constrains_to_that_cuisine() {
        let prompt = build_prompt(&ingredients(&["rice", "paneer"]), "Punjabi");
        assert!(prompt.contains("authentic Punjabi cuisine"));
        assert!(!prompt.contains("different parts of the world"));
    }

    #[test]
    fn test_prompt_pins_difficulty_vocabulary_and_count() {
        let prompt = build_prompt(&ingredients(&["rice"]), "Thai");
        assert!(prompt.contains("'Easy', 'Medium', or 'Hard'"));
        assert!(prompt.contains(&format!("exactly {RECIPE_COUNT} recipe objects")));
    }
}
