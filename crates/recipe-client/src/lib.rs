//! # Recipe Client
//!
//! Typed access to the recipe-sharing API, with bundled sample data standing in
//! for the server on read paths.
//!
//! - **[model]**: records exchanged with the API ([`User`](model::User), [`Recipe`](model::Recipe), [`FoodStatus`](model::FoodStatus), [`Friendship`](model::Friendship)) and their write payloads.
//! - **[clients]**: one typed client per resource, e.g. [`RecipeClient`](clients::RecipeClient).
//! - **[config]**: command line, config file and base-URL resolution.
//! - **[forms]**: validation of the write screens.
//! - **[fixtures]**: the bundled sample data.
//! - **[lifecycle]**: the [`RecipeSystem`](lifecycle::RecipeSystem) that wires it all together and applies fallback to reads.
//!
//! ## Testing
//!
//! See [`api_framework::mock`] for driving clients and the system without a server.

pub mod clients;
pub mod config;
pub mod fixtures;
pub mod forms;
pub mod lifecycle;
pub mod model;
