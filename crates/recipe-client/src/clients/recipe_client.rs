//! # Recipe Client
//!
//! Full CRUD over `/recipes/`. Errors are returned as-is; read-side fallback is
//! applied by [`RecipeSystem`](crate::lifecycle::RecipeSystem), never here.
use crate::model::{Recipe, RecipeCreate, RecipeId, RecipeUpdate};
use api_framework::{ApiClient, ApiError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct RecipeClient {
    inner: ResourceClient<Recipe>,
}

impl RecipeClient {
    pub fn new(inner: ResourceClient<Recipe>) -> Self {
        Self { inner }
    }

    pub async fn list_recipes(&self) -> Result<Vec<Recipe>, ApiError> {
        ApiClient::list(self).await
    }

    /// `None` when the server answered without a body.
    pub async fn get_recipe(&self, id: RecipeId) -> Result<Option<Recipe>, ApiError> {
        ApiClient::get(self, id).await
    }

    /// `Ok(None)` means the server accepted the recipe but did not echo it back.
    #[instrument(skip(self))]
    pub async fn create_recipe(&self, params: &RecipeCreate) -> Result<Option<Recipe>, ApiError> {
        debug!("Sending request");
        self.inner.create(params).await
    }

    #[instrument(skip(self))]
    pub async fn update_recipe(
        &self,
        id: RecipeId,
        update: &RecipeUpdate,
    ) -> Result<Option<Recipe>, ApiError> {
        debug!("Sending request");
        self.inner.update(id, update).await
    }

    pub async fn delete_recipe(&self, id: RecipeId) -> Result<(), ApiError> {
        ApiClient::delete(self, id).await
    }
}

#[async_trait]
impl ApiClient<Recipe> for RecipeClient {
    fn inner(&self) -> &ResourceClient<Recipe> {
        &self.inner
    }
}
