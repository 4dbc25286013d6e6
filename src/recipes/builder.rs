//! Recipe authoring.
//!
//! A [`RecipeDraft`] collects user input (typically from a YAML file) and is
//! validated before it becomes a [`Recipe`] with generated ids and derived
//! totals.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::types::{CookingSettings, Difficulty, Ingredient, Recipe, RecipeStep, StepKind};
use crate::error::SimmerError;

/// Minimum title length, in characters.
pub const MIN_TITLE_LEN: usize = 3;

/// Step variant as written in a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftStepType {
    /// Timed appliance step
    Cooking,
    /// Manual step
    #[default]
    Instruction,
}

/// Ingredient as entered by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftIngredient {
    /// Ingredient name
    pub name: String,
    /// Amount
    pub quantity: f64,
    /// Unit
    pub unit: String,
}

/// Step as entered by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftStep {
    /// What to do
    pub description: String,
    /// Step variant
    #[serde(rename = "type", default)]
    pub step_type: DraftStepType,
    /// Duration in minutes, required
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    /// Cooking temperature, required for cooking steps
    #[serde(default)]
    pub temperature: Option<f64>,
    /// Appliance speed, required for cooking steps
    #[serde(default)]
    pub speed: Option<f64>,
    /// Names of the draft ingredients this step uses
    #[serde(default)]
    pub ingredients: Vec<String>,
}

/// A recipe being authored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeDraft {
    /// Recipe title
    pub title: String,
    /// Cuisine, optional
    #[serde(default)]
    pub cuisine: String,
    /// Difficulty, defaults to easy
    #[serde(default = "default_difficulty")]
    pub difficulty: Difficulty,
    /// Ingredients in authoring order
    #[serde(default)]
    pub ingredients: Vec<DraftIngredient>,
    /// Steps in cooking order
    #[serde(default)]
    pub steps: Vec<DraftStep>,
}

const fn default_difficulty() -> Difficulty {
    Difficulty::Easy
}

fn invalid(message: impl Into<String>) -> SimmerError {
    SimmerError::Validation(message.into())
}

fn validate_ingredient(ingredient: &DraftIngredient) -> Result<(), SimmerError> {
    if ingredient.name.trim().is_empty() || ingredient.unit.trim().is_empty() {
        return Err(invalid("Please fill all ingredient fields"));
    }
    if !(ingredient.quantity.is_finite() && ingredient.quantity > 0.0) {
        return Err(invalid(format!(
            "Ingredient \"{}\" needs a positive quantity",
            ingredient.name
        )));
    }
    Ok(())
}

fn validate_step(step: &DraftStep) -> Result<(), SimmerError> {
    if step.description.trim().is_empty() || step.duration_minutes.is_none() {
        return Err(invalid("Step description and duration are required"));
    }
    if step.step_type == DraftStepType::Cooking && (step.temperature.is_none() || step.speed.is_none())
    {
        return Err(invalid("Cooking steps require temperature and speed"));
    }
    Ok(())
}

fn new_id() -> String {
    Uuid::new_v4().simple().to_string()
}

impl RecipeDraft {
    /// Start an empty draft.
    #[must_use]
    pub fn new(title: impl Into<String>, difficulty: Difficulty) -> Self {
        Self {
            title: title.into(),
            cuisine: String::new(),
            difficulty,
            ingredients: Vec::new(),
            steps: Vec::new(),
        }
    }

    /// Parse a draft from YAML (JSON is accepted too).
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid draft document.
    pub fn from_yaml(text: &str) -> Result<Self, SimmerError> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Add an ingredient, rejecting incomplete input.
    ///
    /// # Errors
    ///
    /// Returns `SimmerError::Validation` if a field is missing.
    pub fn add_ingredient(&mut self, ingredient: DraftIngredient) -> Result<(), SimmerError> {
        validate_ingredient(&ingredient)?;
        self.ingredients.push(ingredient);
        Ok(())
    }

    /// Add a step, rejecting incomplete input.
    ///
    /// # Errors
    ///
    /// Returns `SimmerError::Validation` if a field is missing.
    pub fn add_step(&mut self, step: DraftStep) -> Result<(), SimmerError> {
        validate_step(&step)?;
        self.steps.push(step);
        Ok(())
    }

    /// Sum of step durations in minutes, `None` if it does not fit a `u32`.
    #[must_use]
    pub fn total_time_minutes(&self) -> Option<u32> {
        self.steps
            .iter()
            .try_fold(0u32, |total, s| total.checked_add(s.duration_minutes.unwrap_or(0)))
    }

    /// Difficulty weight times number of steps.
    #[must_use]
    pub fn complexity_score(&self) -> u32 {
        let steps = u32::try_from(self.steps.len()).unwrap_or(u32::MAX);
        self.difficulty.weight().saturating_mul(steps)
    }

    /// Check the whole draft.
    ///
    /// # Errors
    ///
    /// Returns `SimmerError::Validation` describing the first problem found.
    pub fn validate(&self) -> Result<(), SimmerError> {
        if self.title.trim().chars().count() < MIN_TITLE_LEN {
            return Err(invalid(format!(
                "Title must be at least {MIN_TITLE_LEN} characters long"
            )));
        }
        if self.ingredients.is_empty() {
            return Err(invalid("Add at least one ingredient"));
        }
        if self.steps.is_empty() {
            return Err(invalid("Add at least one step"));
        }
        if self.total_time_minutes().is_none() {
            return Err(invalid("Total cooking time is too long"));
        }

        for ingredient in &self.ingredients {
            validate_ingredient(ingredient)?;
        }

        for step in &self.steps {
            validate_step(step)?;
            if let Some(name) = step
                .ingredients
                .iter()
                .find(|name| !self.ingredients.iter().any(|i| i.name.eq_ignore_ascii_case(name)))
            {
                return Err(invalid(format!(
                    "Step \"{}\" uses unknown ingredient \"{name}\"",
                    step.description
                )));
            }
        }

        Ok(())
    }

    /// Validate and turn the draft into a recipe.
    ///
    /// # Errors
    ///
    /// Returns `SimmerError::Validation` if the draft is incomplete.
    pub fn build(self) -> Result<Recipe, SimmerError> {
        self.validate()?;

        let total_time_minutes = self
            .total_time_minutes()
            .ok_or_else(|| invalid("Total cooking time is too long"))?;
        let complexity_score = self.complexity_score();

        let ingredients: Vec<Ingredient> = self
            .ingredients
            .into_iter()
            .map(|i| Ingredient {
                id: new_id(),
                name: i.name.trim().to_string(),
                quantity: i.quantity,
                unit: i.unit.trim().to_string(),
            })
            .collect();

        let steps = self
            .steps
            .into_iter()
            .map(|s| {
                let kind = match s.step_type {
                    DraftStepType::Cooking => StepKind::Cooking {
                        settings: CookingSettings {
                            temperature: s.temperature.unwrap_or_default(),
                            speed: s.speed.unwrap_or_default(),
                        },
                    },
                    DraftStepType::Instruction => StepKind::Instruction {
                        ingredient_ids: s
                            .ingredients
                            .iter()
                            .filter_map(|name| {
                                ingredients
                                    .iter()
                                    .find(|i| i.name.eq_ignore_ascii_case(name.trim()))
                                    .map(|i| i.id.clone())
                            })
                            .collect(),
                    },
                };

                RecipeStep {
                    id: new_id(),
                    description: s.description.trim().to_string(),
                    duration_minutes: s.duration_minutes.unwrap_or(0),
                    kind,
                }
            })
            .collect();

        let now = Utc::now();
        Ok(Recipe {
            id: new_id(),
            title: self.title.trim().to_string(),
            cuisine: self.cuisine.trim().to_string(),
            difficulty: self.difficulty,
            ingredients,
            steps,
            is_favorite: false,
            total_time_minutes,
            complexity_score,
            created_at: now,
            updated_at: now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tomato() -> DraftIngredient {
        DraftIngredient {
            name: "Tomato".to_string(),
            quantity: 2.0,
            unit: "pcs".to_string(),
        }
    }

    fn boil() -> DraftStep {
        DraftStep {
            description: "Boil the tomatoes until soft.".to_string(),
            step_type: DraftStepType::Cooking,
            duration_minutes: Some(5),
            temperature: Some(100.0),
            speed: Some(3.0),
            ingredients: Vec::new(),
        }
    }

    fn chop() -> DraftStep {
        DraftStep {
            description: "Chop".to_string(),
            step_type: DraftStepType::Instruction,
            duration_minutes: Some(2),
            temperature: None,
            speed: None,
            ingredients: vec!["tomato".to_string()],
        }
    }

    fn soup() -> RecipeDraft {
        let mut draft = RecipeDraft::new("Tomato Soup", Difficulty::Medium);
        draft.add_ingredient(tomato()).unwrap();
        draft.add_step(chop()).unwrap();
        draft.add_step(boil()).unwrap();
        draft
    }

    #[test]
    fn test_build_computes_totals() {
        let recipe = soup().build().unwrap();

        assert_eq!(recipe.total_time_minutes, 7);
        assert_eq!(recipe.complexity_score, 4);
        assert!(!recipe.is_favorite);
        assert_eq!(recipe.steps.len(), 2);
        assert_eq!(recipe.steps[1].cooking_settings().unwrap().temperature, 100.0);
    }

    #[test]
    fn test_build_resolves_ingredient_names() {
        let recipe = soup().build().unwrap();
        let chop = &recipe.steps[0];
        assert_eq!(recipe.step_ingredient_labels(chop), ["Tomato"]);
    }

    #[test]
    fn test_short_title_rejected() {
        let mut draft = soup();
        draft.title = "Ab".to_string();
        let err = draft.build().unwrap_err();
        assert!(err.to_string().contains("at least 3 characters"));
    }

    #[test]
    fn test_empty_ingredients_rejected() {
        let mut draft = soup();
        draft.ingredients.clear();
        assert!(matches!(draft.validate(), Err(SimmerError::Validation(_))));
    }

    #[test]
    fn test_empty_steps_rejected() {
        let mut draft = soup();
        draft.steps.clear();
        let err = draft.validate().unwrap_err();
        assert!(err.to_string().contains("at least one step"));
    }

    #[test]
    fn test_incomplete_ingredient_rejected() {
        let mut draft = RecipeDraft::new("Soup", Difficulty::Easy);
        let result = draft.add_ingredient(DraftIngredient {
            name: "Salt".to_string(),
            quantity: 1.0,
            unit: String::new(),
        });
        assert!(result.is_err());
        assert!(draft.ingredients.is_empty());
    }

    #[test]
    fn test_cooking_step_needs_settings() {
        let mut draft = RecipeDraft::new("Soup", Difficulty::Easy);
        let mut step = boil();
        step.speed = None;
        assert!(draft.add_step(step).is_err());
        assert!(draft.steps.is_empty());
    }

    #[test]
    fn test_unknown_ingredient_reference_rejected() {
        let mut draft = soup();
        draft.steps[0].ingredients = vec!["Basil".to_string()];
        let err = draft.validate().unwrap_err();
        assert!(err.to_string().contains("Basil"));
    }

    #[test]
    fn test_step_without_duration_rejected() {
        let mut draft = RecipeDraft::new("Soup", Difficulty::Easy);
        let mut step = chop();
        step.duration_minutes = None;
        let err = draft.add_step(step).unwrap_err();
        assert!(err.to_string().contains("duration are required"));

        let yaml = r"
title: Tomato Soup
ingredients:
  - { name: Tomato, quantity: 2, unit: pcs }
steps:
  - description: Chop
";
        let draft = RecipeDraft::from_yaml(yaml).unwrap();
        assert!(matches!(draft.build(), Err(SimmerError::Validation(_))));
    }

    #[test]
    fn test_overlong_total_time_rejected() {
        let yaml = r"
title: Very Slow Soup
ingredients:
  - { name: Tomato, quantity: 2, unit: pcs }
steps:
  - description: Simmer
    durationMinutes: 4000000000
  - description: Simmer more
    durationMinutes: 4000000000
";
        let draft = RecipeDraft::from_yaml(yaml).unwrap();
        assert_eq!(draft.total_time_minutes(), None);

        let err = draft.build().unwrap_err();
        assert!(matches!(err, SimmerError::Validation(_)));
        assert!(err.to_string().contains("Total cooking time is too long"));
    }

    #[test]
    fn test_from_yaml() {
        let yaml = r"
title: Tomato Soup
difficulty: Hard
ingredients:
  - name: Tomato
    quantity: 2
    unit: pcs
steps:
  - description: Chop
    durationMinutes: 2
    ingredients: [Tomato]
  - description: Boil
    type: cooking
    durationMinutes: 5
    temperature: 100
    speed: 3
";
        let draft = RecipeDraft::from_yaml(yaml).unwrap();
        assert_eq!(draft.difficulty, Difficulty::Hard);
        assert_eq!(draft.steps[0].step_type, DraftStepType::Instruction);

        let recipe = draft.build().unwrap();
        assert_eq!(recipe.total_time_minutes, 7);
        assert_eq!(recipe.complexity_score, 6);
    }
}
