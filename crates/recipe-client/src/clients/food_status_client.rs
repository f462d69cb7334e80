//! # Food Status Client
//!
//! Stories: list and create only.
use crate::model::{FoodStatus, FoodStatusCreate};
use api_framework::{ApiClient, ApiError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct FoodStatusClient {
    inner: ResourceClient<FoodStatus>,
}

impl FoodStatusClient {
    pub fn new(inner: ResourceClient<FoodStatus>) -> Self {
        Self { inner }
    }

    pub async fn list_food_statuses(&self) -> Result<Vec<FoodStatus>, ApiError> {
        ApiClient::list(self).await
    }

    #[instrument(skip(self))]
    pub async fn create_food_status(
        &self,
        params: &FoodStatusCreate,
    ) -> Result<Option<FoodStatus>, ApiError> {
        debug!("Sending request");
        self.inner.create(params).await
    }
}

#[async_trait]
impl ApiClient<FoodStatus> for FoodStatusClient {
    fn inner(&self) -> &ResourceClient<FoodStatus> {
        &self.inner
    }
}
