use super::FallbackCatalog;
use crate::clients::{FoodStatusClient, FriendshipClient, RecipeClient, UserClient};
use crate::config::Config;
use crate::forms::{RecipeForm, StatusForm, SubmitError};
use crate::model::{
    FoodStatus, Friendship, Recipe, RecipeId, RecipeUpdate, User, UserId,
};
use api_framework::{
    ApiClient, ApiError, HttpTransport, Resolution, ResourceClient, Transport,
};
use std::sync::Arc;
use tracing::{info, instrument};

/// Friendships and users, loaded side by side.
#[derive(Debug)]
pub struct FriendsView {
    pub friendships: Resolution<Vec<Friendship>>,
    pub users: Resolution<Vec<User>>,
}

impl FriendsView {
    pub fn accepted(&self) -> impl Iterator<Item = &Friendship> {
        self.friendships.data.iter().filter(|f| f.is_accepted())
    }

    pub fn needs_retry(&self) -> bool {
        self.friendships.needs_retry() || self.users.needs_retry()
    }
}

/// The current user and the recipe list shown under them.
#[derive(Debug)]
pub struct ProfileView {
    pub user: Resolution<Option<User>>,
    pub recipes: Resolution<Vec<Recipe>>,
}

/// All resource clients over one transport, plus the fallback policy of each read path.
#[derive(Clone)]
pub struct RecipeSystem {
    pub recipes: RecipeClient,
    pub food_statuses: FoodStatusClient,
    pub friendships: FriendshipClient,
    pub users: UserClient,
    fallback: FallbackCatalog,
}

impl RecipeSystem {
    pub fn new(transport: Arc<dyn Transport>, fallback: FallbackCatalog) -> Self {
        Self {
            recipes: RecipeClient::new(ResourceClient::new(transport.clone())),
            food_statuses: FoodStatusClient::new(ResourceClient::new(transport.clone())),
            friendships: FriendshipClient::new(ResourceClient::new(transport.clone())),
            users: UserClient::new(ResourceClient::new(transport)),
            fallback,
        }
    }

    /// Resolves the base URL from `config` and opens an HTTP transport to it.
    pub fn connect(config: &Config) -> Result<Self, ApiError> {
        let base_url = config.base_url();
        let transport = HttpTransport::new(&base_url, config.timeout())?;
        let fallback = if config.fallback.enabled {
            FallbackCatalog::bundled()
        } else {
            FallbackCatalog::empty()
        };
        info!(
            base_url = %base_url,
            fallback = config.fallback.enabled,
            "Recipe system connected"
        );
        Ok(Self::new(Arc::new(transport), fallback))
    }

    pub fn base_url(&self) -> &str {
        self.recipes.inner().base_url()
    }

    #[instrument(skip(self))]
    pub async fn load_feed(&self) -> Resolution<Vec<Recipe>> {
        self.fallback
            .recipes
            .resolve(self.recipes.list_recipes().await)
    }

    #[instrument(skip(self))]
    pub async fn load_stories(&self) -> Resolution<Vec<FoodStatus>> {
        self.fallback
            .stories
            .resolve(self.food_statuses.list_food_statuses().await)
    }

    #[instrument(skip(self))]
    pub async fn load_recipe(&self, id: RecipeId) -> Resolution<Option<Recipe>> {
        self.fallback
            .recipes
            .resolve_one(self.recipes.get_recipe(id).await, |r| r.id == id)
    }

    #[instrument(skip(self))]
    pub async fn load_user(&self, id: UserId) -> Resolution<Option<User>> {
        self.fallback
            .users
            .resolve_one(self.users.get_user(id).await, |u| u.id == id)
    }

    /// Both lists are requested concurrently and resolved independently.
    #[instrument(skip(self))]
    pub async fn load_friends(&self) -> FriendsView {
        let (friendships, users) = tokio::join!(
            self.friendships.list_friendships(),
            self.users.list_users()
        );
        FriendsView {
            friendships: self.fallback.friendships.resolve(friendships),
            users: self.fallback.users.resolve(users),
        }
    }

    /// The first listed user stands in for the signed-in one.
    #[instrument(skip(self))]
    pub async fn load_profile(&self) -> ProfileView {
        let (users, recipes) = tokio::join!(self.users.list_users(), self.recipes.list_recipes());
        ProfileView {
            user: self
                .fallback
                .users
                .resolve(users)
                .map(|users| users.into_iter().next()),
            recipes: self.fallback.recipes.resolve(recipes),
        }
    }

    /// Validates and submits the form. `Ok(None)` means the server stored the
    /// recipe without sending it back.
    #[instrument(skip(self, form), fields(title = %form.title))]
    pub async fn publish_recipe(&self, form: &RecipeForm) -> Result<Option<Recipe>, SubmitError> {
        form.validate()?;
        let recipe = self.recipes.create_recipe(&form.to_payload()).await?;
        match &recipe {
            Some(recipe) => info!(id = %recipe.id, "Recipe published"),
            None => info!("Recipe published, no body returned"),
        }
        Ok(recipe)
    }

    #[instrument(skip(self, form))]
    pub async fn post_status(&self, form: &StatusForm) -> Result<Option<FoodStatus>, SubmitError> {
        form.validate()?;
        let status = self
            .food_statuses
            .create_food_status(&form.to_payload())
            .await?;
        match &status {
            Some(status) => info!(id = %status.id, "Status posted"),
            None => info!("Status posted, no body returned"),
        }
        Ok(status)
    }

    #[instrument(skip(self))]
    pub async fn edit_recipe(
        &self,
        id: RecipeId,
        update: &RecipeUpdate,
    ) -> Result<Option<Recipe>, ApiError> {
        self.recipes.update_recipe(id, update).await
    }

    #[instrument(skip(self))]
    pub async fn delete_recipe(&self, id: RecipeId) -> Result<(), ApiError> {
        self.recipes.delete_recipe(id).await?;
        info!(id = %id, "Recipe deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn add_friend(&self, user_id: UserId) -> Result<Option<Friendship>, ApiError> {
        self.friendships.create_friendship(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{mock_recipes, mock_stories, mock_users};
    use api_framework::mock::MockTransport;
    use api_framework::{DataSource, Method};
    use serde_json::{json, Value};

    fn recipe_json(id: u64, title: &str, created_at: &str) -> Value {
        json!({
            "id": id,
            "author": {"id": 2, "username": "Siebe"},
            "title": title,
            "description": "",
            "ingredients": "Pasta",
            "instructions": "Cook",
            "visibility": "friends",
            "created_at": created_at,
            "updated_at": created_at
        })
    }

    fn system(mock: &MockTransport) -> RecipeSystem {
        RecipeSystem::new(mock.transport(), FallbackCatalog::bundled())
    }

    #[tokio::test]
    async fn test_feed_sorts_live_recipes_newest_first() {
        let mock = MockTransport::new("http://api.test/api");
        mock.expect(Method::GET, "recipes/").return_json(json!([
            recipe_json(1, "Old", "2025-11-01T00:00:00Z"),
            recipe_json(2, "New", "2025-11-20T00:00:00Z"),
            recipe_json(3, "Also old", "2025-11-01T00:00:00Z"),
        ]));

        let feed = system(&mock).load_feed().await;
        assert!(feed.is_live());
        let titles: Vec<_> = feed.data.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["New", "Old", "Also old"]);
    }

    #[tokio::test]
    async fn test_empty_feed_uses_bundled_recipes() {
        let mock = MockTransport::new("http://api.test/api");
        mock.expect(Method::GET, "recipes/").return_json(json!({"results": []}));

        let feed = system(&mock).load_feed().await;
        assert_eq!(feed.source, DataSource::Fallback);
        assert!(feed.error.is_none());
        assert_eq!(feed.data, mock_recipes());
    }

    #[tokio::test]
    async fn test_failed_stories_use_bundled_stories() {
        let mock = MockTransport::new("http://api.test/api");
        mock.expect(Method::GET, "food-statuses/").return_err(ApiError::Unreachable {
            base_url: "http://api.test/api".into(),
        });

        let stories = system(&mock).load_stories().await;
        assert_eq!(stories.source, DataSource::Fallback);
        assert!(!stories.needs_retry());
        assert_eq!(stories.data, mock_stories());
        assert!(matches!(stories.error, Some(ApiError::Unreachable { .. })));
    }

    #[tokio::test]
    async fn test_recipe_detail_falls_back_by_id() {
        let mock = MockTransport::new("http://api.test/api");
        mock.expect(Method::GET, "recipes/4/").return_err(ApiError::Timeout);
        mock.expect(Method::GET, "recipes/99/").return_err(ApiError::Timeout);

        let system = system(&mock);
        let detail = system.load_recipe(RecipeId(4)).await;
        assert_eq!(detail.source, DataSource::Fallback);
        assert_eq!(detail.data.map(|r| r.title), Some("Spieße".to_string()));

        let missing = system.load_recipe(RecipeId(99)).await;
        assert!(missing.needs_retry());
        assert!(missing.data.is_none());
    }

    #[tokio::test]
    async fn test_friends_view_resolves_lists_independently() {
        let mock = MockTransport::new("http://api.test/api");
        mock.expect(Method::GET, "friendships/")
            .return_err(ApiError::ServerError {
                status: 500,
                body: "Internal Server Error".into(),
            });
        mock.expect(Method::GET, "users/").return_err(ApiError::Timeout);

        let view = system(&mock).load_friends().await;
        assert!(view.friendships.needs_retry());
        assert_eq!(view.users.source, DataSource::Fallback);
        assert_eq!(view.users.data, mock_users());
        assert!(view.needs_retry());
        assert_eq!(view.accepted().count(), 0);
    }

    #[tokio::test]
    async fn test_friends_view_filters_accepted() {
        let mock = MockTransport::new("http://api.test/api");
        let friendship = |id: u64, status: &str| {
            json!({
                "id": id,
                "requester": {"id": 1, "username": "Mengmeng"},
                "addressee": {"id": id + 1, "username": "Friend"},
                "status": status,
                "created_at": "2025-11-01T00:00:00Z",
                "updated_at": "2025-11-01T00:00:00Z"
            })
        };
        mock.expect(Method::GET, "friendships/").return_json(json!([
            friendship(1, "accepted"),
            friendship(2, "pending"),
            friendship(3, "blocked"),
        ]));
        mock.expect(Method::GET, "users/")
            .return_json(json!([{"id": 1, "username": "Mengmeng"}]));

        let view = system(&mock).load_friends().await;
        assert!(!view.needs_retry());
        let accepted: Vec<_> = view.accepted().map(|f| f.id.0).collect();
        assert_eq!(accepted, [1]);
    }

    #[tokio::test]
    async fn test_profile_uses_first_user() {
        let mock = MockTransport::new("http://api.test/api");
        mock.expect(Method::GET, "users/").return_json(json!([]));
        mock.expect(Method::GET, "recipes/").return_err(ApiError::Timeout);

        let profile = system(&mock).load_profile().await;
        assert_eq!(profile.user.source, DataSource::Fallback);
        assert_eq!(
            profile.user.data.map(|u| u.username),
            Some("Mengmeng".to_string())
        );
        assert_eq!(profile.recipes.data.len(), 6);
    }

    #[tokio::test]
    async fn test_disabled_fallback_surfaces_failures() {
        let mock = MockTransport::new("http://api.test/api");
        mock.expect(Method::GET, "recipes/").return_err(ApiError::Timeout);

        let system = RecipeSystem::new(mock.transport(), FallbackCatalog::empty());
        let feed = system.load_feed().await;
        assert!(feed.needs_retry());
        assert!(feed.data.is_empty());
        assert!(matches!(feed.error, Some(ApiError::Timeout)));
    }

    #[tokio::test]
    async fn test_incomplete_form_is_not_sent() {
        let mock = MockTransport::new("http://api.test/api");
        let form = RecipeForm {
            title: "Toast".into(),
            ..Default::default()
        };

        let err = system(&mock).publish_recipe(&form).await.unwrap_err();
        assert!(matches!(
            err,
            SubmitError::MissingFields(ref fields) if fields == &["ingredients", "instructions"]
        ));
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn test_failed_write_keeps_form_and_surfaces_error() {
        let mock = MockTransport::new("http://api.test/api");
        mock.expect(Method::POST, "food-statuses/")
            .return_err(ApiError::Timeout);

        let form = StatusForm {
            content: "Ramen! 🍜".into(),
            ..Default::default()
        };
        let before = form.clone();
        let err = system(&mock).post_status(&form).await.unwrap_err();
        assert!(matches!(err, SubmitError::Api(ApiError::Timeout)));
        assert_eq!(form, before);
        assert_eq!(
            mock.requests()[0].body,
            Some(json!({"content": "Ramen! 🍜", "visibility": "friends"}))
        );
    }

    #[tokio::test]
    async fn test_bodiless_writes_are_successes() {
        let mock = MockTransport::new("http://api.test/api");
        mock.expect(Method::POST, "recipes/").return_empty();
        mock.expect(Method::POST, "food-statuses/").return_empty();
        mock.expect(Method::PATCH, "recipes/2/").return_empty();

        let system = system(&mock);
        let form = RecipeForm {
            title: "Toast".into(),
            ingredients: "Bread".into(),
            instructions: "Toast it".into(),
            ..Default::default()
        };
        assert!(system.publish_recipe(&form).await.unwrap().is_none());

        let status = StatusForm {
            content: "Toast again".into(),
            ..Default::default()
        };
        assert!(system.post_status(&status).await.unwrap().is_none());

        let update = RecipeUpdate {
            title: Some("Better Toast".into()),
            ..Default::default()
        };
        assert!(system.edit_recipe(RecipeId(2), &update).await.unwrap().is_none());
        mock.verify();
    }

    #[tokio::test]
    async fn test_bodiless_detail_uses_bundled_recipe_without_error() {
        let mock = MockTransport::new("http://api.test/api");
        mock.expect(Method::GET, "recipes/1/").return_empty();

        let detail = system(&mock).load_recipe(RecipeId(1)).await;
        assert_eq!(detail.source, DataSource::Fallback);
        assert!(detail.error.is_none());
        assert_eq!(detail.data.map(|r| r.title), Some("Pizza".to_string()));
    }

    #[tokio::test]
    async fn test_writes_bypass_fallback() {
        let mock = MockTransport::new("http://api.test/api");
        mock.expect(Method::DELETE, "recipes/1/")
            .return_err(ApiError::Unreachable {
                base_url: "http://api.test/api".into(),
            });
        mock.expect(Method::POST, "friendships/")
            .return_err(ApiError::Timeout);

        let system = system(&mock);
        assert!(system.delete_recipe(RecipeId(1)).await.is_err());
        assert!(system.add_friend(UserId(3)).await.is_err());
        mock.verify();
    }
}
