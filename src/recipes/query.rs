//! Filtering and sorting for the recipe list.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::types::{Difficulty, Recipe};

/// Sort direction for total cooking time.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Quickest first.
    #[default]
    Asc,
    /// Longest first.
    Desc,
}

impl SortOrder {
    /// The other direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Which recipes to show and in what order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeQuery {
    /// Allowed difficulties; empty means all.
    pub difficulties: Vec<Difficulty>,
    /// Only starred recipes.
    pub favorites_only: bool,
    /// Order by total time.
    pub sort: SortOrder,
}

impl RecipeQuery {
    /// Whether a recipe passes the filters.
    #[must_use]
    pub fn matches(&self, recipe: &Recipe) -> bool {
        (self.difficulties.is_empty() || self.difficulties.contains(&recipe.difficulty))
            && (!self.favorites_only || recipe.is_favorite)
    }

    /// Filter and sort. Recipes with equal time keep storage order.
    #[must_use]
    pub fn apply<'a>(&self, recipes: &'a [Recipe]) -> Vec<&'a Recipe> {
        let mut selected: Vec<&Recipe> = recipes.iter().filter(|r| self.matches(r)).collect();

        match self.sort {
            SortOrder::Asc => selected.sort_by_key(|r| r.total_time_minutes),
            SortOrder::Desc => {
                selected.sort_by(|a, b| b.total_time_minutes.cmp(&a.total_time_minutes));
            }
        }

        selected
    }
}
