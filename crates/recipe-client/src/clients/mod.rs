//! Typed clients, one per remote resource.
//!
//! Each wraps a [`ResourceClient`](api_framework::ResourceClient) and gets
//! `list`/`get`/`delete` from [`ApiClient`](api_framework::ApiClient). The named
//! methods are the operations the rest of the crate calls; reads and deletes
//! delegate to the trait, creates and updates go to the inner client.

pub mod food_status_client;
pub mod friendship_client;
pub mod recipe_client;
pub mod user_client;

pub use food_status_client::FoodStatusClient;
pub use friendship_client::FriendshipClient;
pub use recipe_client::RecipeClient;
pub use user_client::UserClient;
