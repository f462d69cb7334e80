//! A recipe as served by `/recipes/`.
//!
//! `ingredients` and `instructions` are opaque free text; splitting them into
//! list items is left to whoever renders them.
//!
//! Write payloads are
//! [`RecipeCreate`] and [`RecipeUpdate`].

use super::{RecipeId, User, Visibility};
use api_framework::ApiEntity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub author: User,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub ingredients: String,
    #[serde(rename = "prepTime", default, skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<String>,
    pub instructions: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub visibility: Visibility,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ApiEntity for Recipe {
    type Id = RecipeId;
    const COLLECTION: &'static str = "recipes";
    const NAME: &'static str = "Recipe";
}

impl Recipe {
    /// Feed ordering: most recently created first.
    pub fn newest_first(a: &Recipe, b: &Recipe) -> Ordering {
        b.created_at.cmp(&a.created_at)
    }
}

/// Payload for `POST /recipes/`.
///
/// The client does not check completeness; see
/// [`RecipeForm`](crate::forms::RecipeForm) for caller-side validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecipeCreate {
    pub title: String,
    pub description: String,
    pub ingredients: String,
    #[serde(rename = "prepTime", skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<String>,
    pub instructions: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
}

/// Partial payload for `PATCH /recipes/{id}/`. Unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecipeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<String>,
    #[serde(rename = "prepTime", skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
}

impl RecipeUpdate {
    pub fn is_empty(&self) -> bool {
        *self == RecipeUpdate::default()
    }
}
