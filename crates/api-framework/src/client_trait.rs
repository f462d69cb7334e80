//! # ApiClient Trait
//!
//! Provides a common interface for resource-specific clients, adding default
//! `list`, `get` and `delete` methods built on top of a generic [`ResourceClient`].
use crate::{ApiEntity, ApiError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard read and delete operations.
///
/// # Example
///
/// ```rust
/// use api_framework::{ApiClient, ApiEntity, ResourceClient};
/// use api_framework::mock::MockTransport;
/// use api_framework::Method;
/// use async_trait::async_trait;
/// use serde::Deserialize;
///
/// // 1. Define Entity
/// #[derive(Clone, Debug, Deserialize)]
/// struct Tag { id: u32, label: String }
///
/// impl ApiEntity for Tag {
///     type Id = u32;
///     const COLLECTION: &'static str = "tags";
///     const NAME: &'static str = "Tag";
/// }
///
/// // 2. Define Client Wrapper
/// struct TagClient { inner: ResourceClient<Tag> }
///
/// // 3. Implement ApiClient
/// #[async_trait]
/// impl ApiClient<Tag> for TagClient {
///     fn inner(&self) -> &ResourceClient<Tag> { &self.inner }
/// }
///
/// // 4. Usage: list(), get() and delete() are provided automatically!
/// #[tokio::main]
/// async fn main() {
///     let mock = MockTransport::new("http://api.test/api");
///     mock.expect(Method::GET, "tags/").return_json(serde_json::json!([{"id": 1, "label": "vegan"}]));
///
///     let client = TagClient { inner: ResourceClient::new(mock.transport()) };
///     let tags = client.list().await.unwrap();
///     assert_eq!(tags[0].label, "vegan");
/// }
/// ```
#[async_trait]
pub trait ApiClient<T: ApiEntity>: Send + Sync {
    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Fetch the whole collection.
    #[tracing::instrument(skip(self), fields(entity = T::NAME))]
    async fn list(&self) -> Result<Vec<T>, ApiError> {
        tracing::debug!("Sending request");
        self.inner().list().await
    }

    /// Fetch an entity by ID. `None` when the server answered without a body.
    #[tracing::instrument(skip(self), fields(entity = T::NAME))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, ApiError> {
        tracing::debug!("Sending request");
        self.inner().get(id).await
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self), fields(entity = T::NAME))]
    async fn delete(&self, id: T::Id) -> Result<(), ApiError> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await
    }
}
