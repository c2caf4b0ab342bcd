// Models are always available
pub mod models;

// Server-only modules
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod error;
#[cfg(feature = "server")]
pub mod gemini;
#[cfg(feature = "server")]
pub mod http;
#[cfg(feature = "server")]
pub mod prompt;
#[cfg(feature = "server")]
pub mod schema;

// Re-export commonly used types
pub use models::{
    CUISINE_OPTIONS, CuisineOrigin, DEFAULT_CUISINE, Difficulty, GenerateRequest, IngredientSet,
    NutritionInfo, RECIPE_COUNT, Recipe,
};

#[cfg(feature = "server")]
pub use config::Config;
#[cfg(feature = "server")]
pub use error::GenerateError;
