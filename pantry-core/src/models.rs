use serde::{Deserialize, Serialize};

/// Number of recipes requested per generation. The prompt, the response
/// schema and the loading skeletons all derive from this one value.
pub const RECIPE_COUNT: usize = 3;

/// Cuisine styles offered by the UI. "Global" means no regional constraint.
pub const CUISINE_OPTIONS: &[&str] = &[
    "Global",
    "Chettinad",
    "Goan",
    "Hyderabadi",
    "Italian",
    "Japanese",
    "Mexican",
    "Mughlai",
    "Nepali",
    "Punjabi",
    "Telangana",
    "Thai",
];

pub const DEFAULT_CUISINE: &str = "Global";

/// Request body for `POST /api/generate-recipes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub ingredients: Vec<String>,
    pub cuisine: String,
}

/// Recipe difficulty. The provider is instructed to use exactly these
/// three values; anything else fails the decode of the whole response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

/// A cultural/historical fact about the recipe's cuisine plus a link to
/// read more.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CuisineOrigin {
    pub fact: String,
    pub learn_more_link: String,
}

/// Estimated nutrition per serving, as prose (e.g. "450 kcal", "30g").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionInfo {
    pub calories: String,
    pub protein: String,
}

/// One AI-generated dish suggestion.
///
/// This is the single canonical schema version: name, description, prep
/// time, difficulty, ordered ingredients and instructions, cuisine origin,
/// nutrition info and a dish image URL. The image URL is requested from the
/// provider but tolerated-missing on decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub recipe_name: String,
    pub description: String,
    pub prep_time: String,
    pub difficulty: Difficulty,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub cuisine_origin: CuisineOrigin,
    pub nutrition_info: NutritionInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// The user's session-scoped ingredient list.
///
/// Entries are stored trimmed and lowercased, so equality is
/// case-insensitive by construction. Insertion order is preserved for
/// display. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientSet(Vec<String>);

impl IngredientSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an ingredient, normalizing to lowercase. Returns `false` (and
    /// leaves the set unchanged) for blank input or a duplicate.
    pub fn add(&mut self, raw: &str) -> bool {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() || self.0.contains(&normalized) {
            return false;
        }
        self.0.push(normalized);
        true
    }

    /// Removes an ingredient by its normalized name. Removing something
    /// that is not present is a no-op.
    pub fn remove(&mut self, name: &str) -> bool {
        let normalized = name.trim().to_lowercase();
        let before = self.0.len();
        self.0.retain(|i| *i != normalized);
        self.0.len() != before
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        self.0.clone()
    }
}

impl FromIterator<String> for IngredientSet {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        let mut set = Self::new();
        for item in iter {
            set.add(&item);
        }
        set
    }
}
