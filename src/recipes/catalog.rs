//! Recipe catalog storage.
//!
//! The whole catalog is one JSON document stored under a fixed record name.
//! Every mutation rewrites it synchronously.

use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use chrono::Utc;
use tracing::{debug, warn};

use super::types::Recipe;
use crate::error::SimmerError;

/// Record name the catalog is stored under.
pub const CATALOG_KEY: &str = "recipes:v1";

/// File name derived from [`CATALOG_KEY`].
pub const CATALOG_FILE: &str = "recipes-v1.json";

/// Read/write access to the recipe collection.
pub trait RecipeCatalog: Send + Sync {
    /// Look up a recipe by id.
    fn get(&self, id: &str) -> Option<Recipe>;

    /// All recipes in storage order.
    fn list(&self) -> Vec<Recipe>;

    /// Append a recipe and persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be written.
    fn create(&self, recipe: Recipe) -> Result<(), SimmerError>;

    /// Set the favorite flag. Returns `false` if no such recipe exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be written.
    fn set_favorite(&self, id: &str, favorite: bool) -> Result<bool, SimmerError>;

    /// Flip the favorite flag, returning the new value.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be written.
    fn toggle_favorite(&self, id: &str) -> Result<Option<bool>, SimmerError> {
        let Some(recipe) = self.get(id) else {
            return Ok(None);
        };
        let favorite = !recipe.is_favorite;
        self.set_favorite(id, favorite)?;
        Ok(Some(favorite))
    }
}

/// Catalog backed by a JSON file.
#[derive(Debug)]
pub struct JsonCatalog {
    path: Option<PathBuf>,
    recipes: RwLock<Vec<Recipe>>,
}

impl JsonCatalog {
    /// Open the catalog stored at `path` (normally `<data dir>/recipes-v1.json`).
    ///
    /// A missing file yields an empty catalog. So does a malformed one: the
    /// parse failure is logged and swallowed.
    #[must_use]
    pub fn open(path: &Path) -> Self {
        let path = path.to_path_buf();
        let recipes = load_recipes(&path);
        debug!(key = CATALOG_KEY, path = %path.display(), count = recipes.len(), "Loaded recipe catalog");

        Self {
            path: Some(path),
            recipes: RwLock::new(recipes),
        }
    }

    /// Catalog that lives only in memory.
    #[must_use]
    pub fn in_memory(recipes: Vec<Recipe>) -> Self {
        Self {
            path: None,
            recipes: RwLock::new(recipes),
        }
    }

    /// Location of the backing file, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn persist(&self, recipes: &[Recipe]) -> Result<(), SimmerError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                SimmerError::Storage(format!("Failed to create {}: {e}", parent.display()))
            })?;
        }

        let contents = serde_json::to_string_pretty(recipes)?;
        std::fs::write(path, contents).map_err(|e| {
            SimmerError::Storage(format!("Failed to write {}: {e}", path.display()))
        })
    }
}

fn load_recipes(path: &Path) -> Vec<Recipe> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to read recipe catalog");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Option<Vec<Recipe>>>(&contents) {
        Ok(recipes) => recipes.unwrap_or_default(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to load recipes, starting empty");
            Vec::new()
        }
    }
}

impl RecipeCatalog for JsonCatalog {
    fn get(&self, id: &str) -> Option<Recipe> {
        let recipes = self.recipes.read().unwrap_or_else(PoisonError::into_inner);
        recipes.iter().find(|r| r.id == id).cloned()
    }

    fn list(&self) -> Vec<Recipe> {
        self.recipes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn create(&self, recipe: Recipe) -> Result<(), SimmerError> {
        let mut recipes = self.recipes.write().unwrap_or_else(PoisonError::into_inner);
        debug!(id = %recipe.id, title = %recipe.title, "Adding recipe");

        let mut updated = recipes.clone();
        updated.push(recipe);
        self.persist(&updated)?;
        *recipes = updated;
        Ok(())
    }

    fn set_favorite(&self, id: &str, favorite: bool) -> Result<bool, SimmerError> {
        let mut recipes = self.recipes.write().unwrap_or_else(PoisonError::into_inner);
        let Some(index) = recipes.iter().position(|r| r.id == id) else {
            return Ok(false);
        };

        let mut updated = recipes.clone();
        updated[index].is_favorite = favorite;
        updated[index].updated_at = Utc::now();
        self.persist(&updated)?;
        *recipes = updated;
        Ok(true)
    }
}
