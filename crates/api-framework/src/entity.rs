//! # ApiEntity Trait
//!
//! The `ApiEntity` trait is the contract every remote resource (Recipe, User, …)
//! implements so that a single generic [`ResourceClient`](crate::ResourceClient)
//! can serve all of them.
//!
//! # Architecture Note
//! The associated `Id` type keeps identifiers from different resources apart: a
//! `ResourceClient<Recipe>` only accepts a `RecipeId`, so passing a user id to a
//! recipe endpoint does not compile.

use serde::de::DeserializeOwned;
use std::fmt::{Debug, Display};

/// A resource exposed by the REST API under a fixed collection path.
pub trait ApiEntity: DeserializeOwned + Clone + Debug + Send + Sync + 'static {
    /// Identifier rendered into item paths (`{collection}/{id}/`).
    type Id: Copy + Eq + Display + Debug + Send + Sync;

    /// Collection segment relative to the base URL, without slashes (e.g. `recipes`).
    const COLLECTION: &'static str;

    /// Short name used in log fields and decode errors.
    const NAME: &'static str;

    /// Path of the collection endpoint.
    fn collection_path() -> String {
        format!("{}/", Self::COLLECTION)
    }

    /// Path of a single item endpoint.
    fn item_path(id: Self::Id) -> String {
        format!("{}/{}/", Self::COLLECTION, id)
    }
}
