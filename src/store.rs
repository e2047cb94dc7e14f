//! Storage port for recipes.

use async_trait::async_trait;

use crate::error::Error;
use crate::recipes::Recipe;

/// Write target for accepted recipes.
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Persists one recipe, replacing any record with the same name.
    async fn put_recipe(&self, recipe: &Recipe) -> Result<(), Error>;
}
