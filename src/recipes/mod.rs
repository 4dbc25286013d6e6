//! Recipes and the recipe catalog.
//!
//! - Recipe, ingredient and step types
//! - JSON-backed catalog
//! - Draft validation for authoring
//! - Filtering and sorting for browsing

pub mod builder;
pub mod catalog;
pub mod query;
pub mod types;

pub use builder::{DraftIngredient, DraftStep, DraftStepType, RecipeDraft};
pub use catalog::{JsonCatalog, RecipeCatalog, CATALOG_FILE, CATALOG_KEY};
pub use query::{RecipeQuery, SortOrder};
pub use types::{
    CookingSettings, Difficulty, Ingredient, Recipe, RecipeStep, StepKind, UNKNOWN_INGREDIENT,
};
