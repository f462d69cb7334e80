//! # System Wiring & Read/Write Flows
//!
//! This module turns a [`Config`](crate::config::Config) into a running
//! [`RecipeSystem`]: one transport, one typed client per resource, and the
//! fallback policy of every read path.
//!
//! ## Wiring
//!
//! ```rust,ignore
//! let config = Config::load(&cli)?;
//! // base URL resolved once, here, and handed to the transport
//! let system = RecipeSystem::connect(&config)?;
//! ```
//!
//! All four clients share the same `Arc<dyn Transport>`; nothing else is shared
//! and nothing is cached between calls.
//!
//! ## Reads vs Writes
//!
//! | Flow | Calls | On failure |
//! |------|-------|------------|
//! | `load_feed` | `GET /recipes/` | bundled recipes |
//! | `load_stories` | `GET /food-statuses/` | bundled stories |
//! | `load_recipe` | `GET /recipes/{id}/` | bundled recipe with that id, else retry |
//! | `load_user` | `GET /users/{id}/` | bundled user with that id, else retry |
//! | `load_friends` | `GET /friendships/` and `GET /users/` concurrently | friendships: retry, users: bundled |
//! | `load_profile` | `GET /users/` and `GET /recipes/` concurrently | first bundled user, bundled recipes |
//! | `publish_recipe`, `post_status` | form check, then `POST` | [`SubmitError`](crate::forms::SubmitError) |
//! | `edit_recipe`, `delete_recipe`, `add_friend` | `PATCH` / `DELETE` / `POST` | [`ApiError`](api_framework::ApiError) |
//!
//! Reads return a [`Resolution`](api_framework::Resolution) and never fail.
//! Writes never consult a fallback.
//!
//! ## Observability
//!
//! Install the subscriber with
//! [`setup_tracing`](api_framework::tracing::setup_tracing) before connecting:
//!
//! ```bash
//! RUST_LOG=info recipe-client feed     # lifecycle and fallback warnings
//! RUST_LOG=debug recipe-client feed    # every request
//! ```

pub mod catalog;
pub mod recipe_system;

pub use catalog::*;
pub use recipe_system::*;
