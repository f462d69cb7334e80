use super::{FoodStatusId, User, Visibility};
use api_framework::ApiEntity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A short-lived food "story" served by `/food-statuses/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodStatus {
    pub id: FoodStatusId,
    pub author: User,
    pub content: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub visibility: Visibility,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

impl ApiEntity for FoodStatus {
    type Id = FoodStatusId;
    const COLLECTION: &'static str = "food-statuses";
    const NAME: &'static str = "FoodStatus";
}

impl FoodStatus {
    /// Whether the story has passed its expiry at `now`. Stories without one never expire.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at <= now)
    }
}

/// Payload for `POST /food-statuses/`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FoodStatusCreate {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}
