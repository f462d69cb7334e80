//! # User Client
//!
//! Read-only access to `/users/`.
use crate::model::{User, UserId};
use api_framework::{ApiClient, ApiError, ResourceClient};
use async_trait::async_trait;

#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }

    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        ApiClient::list(self).await
    }

    pub async fn get_user(&self, id: UserId) -> Result<Option<User>, ApiError> {
        ApiClient::get(self, id).await
    }
}

#[async_trait]
impl ApiClient<User> for UserClient {
    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api_framework::mock::MockTransport;
    use api_framework::Method;
    use serde_json::json;

    #[tokio::test]
    async fn test_get_user() {
        let mock = MockTransport::new("http://api.test/api");
        mock.expect(Method::GET, "users/2/").return_json(json!({
            "id": 2, "username": "Siebe", "email": "siebe@example.com",
            "first_name": "Siebe", "last_name": "User"
        }));

        let client = UserClient::new(ResourceClient::new(mock.transport()));
        let user = client.get_user(UserId(2)).await.unwrap().unwrap();
        assert_eq!(user.display_name(), "Siebe User");
        mock.verify();
    }

    #[tokio::test]
    async fn test_get_user_with_empty_body_is_none() {
        let mock = MockTransport::new("http://api.test/api");
        mock.expect(Method::GET, "users/2/").return_empty();

        let client = UserClient::new(ResourceClient::new(mock.transport()));
        assert_eq!(client.get_user(UserId(2)).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_list_users_rejects_malformed_items() {
        let mock = MockTransport::new("http://api.test/api");
        mock.expect(Method::GET, "users/")
            .return_json(json!([{"id": 0, "username": "nobody"}]));

        let client = UserClient::new(ResourceClient::new(mock.transport()));
        let err = client.list_users().await.unwrap_err();
        assert!(matches!(err, ApiError::Unknown(_)));
    }
}
