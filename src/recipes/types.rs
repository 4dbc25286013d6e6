//! Recipe data types.
//!
//! These mirror the persisted catalog layout: every recipe embeds its
//! ingredients and steps inline.

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Label used when a step references an ingredient the recipe does not have.
pub const UNKNOWN_INGREDIENT: &str = "Unknown";

/// Recipe difficulty, ordered from easiest to hardest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum,
)]
pub enum Difficulty {
    /// Easy
    Easy,
    /// Medium
    Medium,
    /// Hard
    Hard,
}

impl Difficulty {
    /// All difficulties in ascending order.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Weight used for the complexity score.
    #[must_use]
    pub const fn weight(self) -> u32 {
        match self {
            Self::Easy => 1,
            Self::Medium => 2,
            Self::Hard => 3,
        }
    }

    /// Get display name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// An ingredient with its quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Unique identifier within the catalog
    pub id: String,
    /// Ingredient name
    pub name: String,
    /// Amount, in `unit`
    pub quantity: f64,
    /// Unit string (g, ml, pcs, ...)
    pub unit: String,
}

/// Appliance settings for a cooking step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CookingSettings {
    /// Temperature in degrees Celsius
    pub temperature: f64,
    /// Mixer speed
    pub speed: f64,
}

/// What a step asks of the cook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StepKind {
    /// A timed step run with the appliance at fixed settings.
    Cooking {
        #[serde(rename = "cookingSettings")]
        settings: CookingSettings,
    },
    /// A manual step that uses some of the recipe's ingredients.
    Instruction {
        #[serde(rename = "ingredientIds", default)]
        ingredient_ids: Vec<String>,
    },
}

/// One ordered step of a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeStep {
    /// Unique identifier within the catalog
    pub id: String,
    /// What to do
    pub description: String,
    /// How long the step runs
    pub duration_minutes: u32,
    /// Step variant and its payload
    #[serde(flatten)]
    pub kind: StepKind,
}

impl RecipeStep {
    /// Step duration in seconds, the threshold compared against elapsed time.
    #[must_use]
    pub const fn duration_secs(&self) -> u64 {
        self.duration_minutes as u64 * 60
    }

    /// Cooking settings, if this is a cooking step.
    #[must_use]
    pub const fn cooking_settings(&self) -> Option<&CookingSettings> {
        match &self.kind {
            StepKind::Cooking { settings } => Some(settings),
            StepKind::Instruction { .. } => None,
        }
    }

    /// Referenced ingredient ids, empty for cooking steps.
    #[must_use]
    pub fn ingredient_ids(&self) -> &[String] {
        match &self.kind {
            StepKind::Instruction { ingredient_ids } => ingredient_ids,
            StepKind::Cooking { .. } => &[],
        }
    }

    /// Short variant name.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self.kind {
            StepKind::Cooking { .. } => "cooking",
            StepKind::Instruction { .. } => "instruction",
        }
    }
}

/// A stored recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Unique identifier
    pub id: String,
    /// Recipe title
    pub title: String,
    /// Cuisine, may be empty
    #[serde(default)]
    pub cuisine: String,
    /// Difficulty level
    pub difficulty: Difficulty,
    /// Ingredients, in authoring order
    pub ingredients: Vec<Ingredient>,
    /// Steps, in cooking order
    pub steps: Vec<RecipeStep>,
    /// Whether the user starred this recipe
    #[serde(default)]
    pub is_favorite: bool,
    /// Sum of step durations in minutes
    #[serde(default)]
    pub total_time_minutes: u32,
    /// Difficulty weight times step count
    #[serde(default)]
    pub complexity_score: u32,
    /// When the recipe was created
    pub created_at: DateTime<Utc>,
    /// When the recipe was last modified
    pub updated_at: DateTime<Utc>,
}

impl Recipe {
    /// Number of steps.
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Get a step by index.
    #[must_use]
    pub fn step(&self, index: usize) -> Option<&RecipeStep> {
        self.steps.get(index)
    }

    /// Find an ingredient by id.
    #[must_use]
    pub fn ingredient(&self, id: &str) -> Option<&Ingredient> {
        self.ingredients.iter().find(|i| i.id == id)
    }

    /// Display name for an ingredient reference, `"Unknown"` if dangling.
    #[must_use]
    pub fn ingredient_label(&self, id: &str) -> &str {
        self.ingredient(id)
            .map_or(UNKNOWN_INGREDIENT, |i| i.name.as_str())
    }

    /// Labels of the ingredients a step references.
    #[must_use]
    pub fn step_ingredient_labels(&self, step: &RecipeStep) -> Vec<&str> {
        step.ingredient_ids()
            .iter()
            .map(|id| self.ingredient_label(id))
            .collect()
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::recipe_with_durations;
    use super::*;

    #[test]
    fn test_difficulty_ordering() {
        assert!(Difficulty::Easy < Difficulty::Medium);
        assert!(Difficulty::Medium < Difficulty::Hard);
        assert_eq!(Difficulty::Hard.weight(), 3);
    }

    #[test]
    fn test_step_serialization_layout() {
        let step = RecipeStep {
            id: "s1".to_string(),
            description: "Boil".to_string(),
            duration_minutes: 5,
            kind: StepKind::Cooking {
                settings: CookingSettings {
                    temperature: 100.0,
                    speed: 3.0,
                },
            },
        };

        let value = serde_json::to_value(&step).unwrap();
        assert_eq!(value["type"], "cooking");
        assert_eq!(value["durationMinutes"], 5);
        assert_eq!(value["cookingSettings"]["temperature"], 100.0);
    }

    #[test]
    fn test_instruction_step_deserialize() {
        let json = r#"{
            "id": "s2",
            "description": "Chop",
            "durationMinutes": 2,
            "type": "instruction",
            "ingredientIds": ["i1", "i2"]
        }"#;

        let step: RecipeStep = serde_json::from_str(json).unwrap();
        assert_eq!(step.ingredient_ids(), ["i1".to_string(), "i2".to_string()]);
        assert!(step.cooking_settings().is_none());
        assert_eq!(step.duration_secs(), 120);
    }

    #[test]
    fn test_ingredient_label_falls_back_to_unknown() {
        let recipe = recipe_with_durations("r1", &[1]);
        assert_eq!(recipe.ingredient_label("r1-i0"), "Tomato");
        assert_eq!(recipe.ingredient_label("missing"), UNKNOWN_INGREDIENT);
    }
}
