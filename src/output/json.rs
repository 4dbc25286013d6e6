//! JSON output formatting for simmer.

use serde::Serialize;
use serde_json::json;

use crate::error::SimmerError;
use crate::recipes::Recipe;

/// Format recipes as JSON
///
/// # Errors
///
/// Returns `SimmerError::Parse` if JSON serialization fails.
pub fn format_recipes_json(recipes: &[&Recipe]) -> Result<String, SimmerError> {
    let output = json!({
        "count": recipes.len(),
        "items": recipes
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a single recipe as JSON
///
/// # Errors
///
/// Returns `SimmerError::Parse` if JSON serialization fails.
pub fn format_recipe_json(recipe: &Recipe) -> Result<String, SimmerError> {
    Ok(serde_json::to_string_pretty(recipe)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `SimmerError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, SimmerError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipes::types::fixtures::recipe_with_durations;

    #[test]
    fn test_recipes_json_shape() {
        let recipe = recipe_with_durations("r1", &[5]);
        let output = format_recipes_json(&[&recipe]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["count"], 1);
        assert_eq!(value["items"][0]["id"], "r1");
        assert_eq!(value["items"][0]["totalTimeMinutes"], 5);
        assert_eq!(value["items"][0]["steps"][0]["type"], "cooking");
    }

    #[test]
    fn test_recipe_json_is_camel_case() {
        let recipe = recipe_with_durations("r1", &[5]);
        let output = format_recipe_json(&recipe).unwrap();

        assert!(output.contains("\"isFavorite\": false"));
        assert!(output.contains("\"durationMinutes\": 5"));
        assert!(output.contains("\"cookingSettings\""));
    }
}
