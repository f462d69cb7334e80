//! # Friendship Client
use crate::model::{Friendship, FriendshipCreate, UserId};
use api_framework::{ApiClient, ApiError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct FriendshipClient {
    inner: ResourceClient<Friendship>,
}

impl FriendshipClient {
    pub fn new(inner: ResourceClient<Friendship>) -> Self {
        Self { inner }
    }

    pub async fn list_friendships(&self) -> Result<Vec<Friendship>, ApiError> {
        ApiClient::list(self).await
    }

    /// Sends a friendship request to `addressee`. The server decides the initial status.
    #[instrument(skip(self))]
    pub async fn create_friendship(
        &self,
        addressee: UserId,
    ) -> Result<Option<Friendship>, ApiError> {
        debug!("Sending request");
        self.inner.create(&FriendshipCreate { addressee }).await
    }
}

#[async_trait]
impl ApiClient<Friendship> for FriendshipClient {
    fn inner(&self) -> &ResourceClient<Friendship> {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FriendshipStatus;
    use api_framework::mock::MockTransport;
    use api_framework::Method;
    use serde_json::json;

    #[tokio::test]
    async fn test_create_friendship_posts_addressee() {
        let mock = MockTransport::new("http://api.test/api");
        mock.expect(Method::POST, "friendships/").return_json(json!({
            "id": 11,
            "requester": {"id": 1, "username": "Mengmeng"},
            "addressee": {"id": 3, "username": "Baker"},
            "status": "pending",
            "created_at": "2025-11-15T09:00:00Z",
            "updated_at": "2025-11-15T09:00:00Z"
        }));

        let client = FriendshipClient::new(ResourceClient::new(mock.transport()));
        let friendship = client.create_friendship(UserId(3)).await.unwrap().unwrap();
        assert_eq!(friendship.status, FriendshipStatus::Pending);
        assert_eq!(friendship.addressee.username, "Baker");
        assert_eq!(mock.requests()[0].body, Some(json!({"addressee": 3})));
        mock.verify();
    }

    #[tokio::test]
    async fn test_list_friendships_propagates_errors() {
        let mock = MockTransport::new("http://api.test/api");
        mock.expect(Method::GET, "friendships/")
            .return_err(ApiError::Timeout);

        let client = FriendshipClient::new(ResourceClient::new(mock.transport()));
        let err = client.list_friendships().await.unwrap_err();
        assert!(matches!(err, ApiError::Timeout));
    }
}
