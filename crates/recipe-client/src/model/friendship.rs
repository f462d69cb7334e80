use super::{FriendshipId, User, UserId};
use api_framework::ApiEntity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FriendshipStatus {
    Pending,
    Accepted,
    Blocked,
}

/// A friendship request between two users, served by `/friendships/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Friendship {
    pub id: FriendshipId,
    pub requester: User,
    pub addressee: User,
    pub status: FriendshipStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ApiEntity for Friendship {
    type Id = FriendshipId;
    const COLLECTION: &'static str = "friendships";
    const NAME: &'static str = "Friendship";
}

impl Friendship {
    pub fn is_accepted(&self) -> bool {
        self.status == FriendshipStatus::Accepted
    }
}

/// Payload for `POST /friendships/`: `{"addressee": <user id>}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FriendshipCreate {
    pub addressee: UserId,
}
