use crate::fixtures::{mock_recipes, mock_stories, mock_users};
use crate::model::{FoodStatus, Friendship, Recipe, User};
use api_framework::FallbackPolicy;

/// The fallback policy of every read path.
#[derive(Debug, Clone)]
pub struct FallbackCatalog {
    pub recipes: FallbackPolicy<Recipe>,
    pub stories: FallbackPolicy<FoodStatus>,
    pub friendships: FallbackPolicy<Friendship>,
    pub users: FallbackPolicy<User>,
}

impl FallbackCatalog {
    /// Bundled sample data for recipes, stories and users. Friendships have none.
    pub fn bundled() -> Self {
        Self {
            recipes: FallbackPolicy::new("recipes", mock_recipes())
                .sort_live_by(Recipe::newest_first),
            stories: FallbackPolicy::new("food-statuses", mock_stories()),
            friendships: FallbackPolicy::none("friendships"),
            users: FallbackPolicy::new("users", mock_users()),
        }
    }

    /// No substitutes anywhere; failed reads leave their view unavailable.
    pub fn empty() -> Self {
        Self {
            recipes: FallbackPolicy::none("recipes").sort_live_by(Recipe::newest_first),
            stories: FallbackPolicy::none("food-statuses"),
            friendships: FallbackPolicy::none("friendships"),
            users: FallbackPolicy::none("users"),
        }
    }
}
