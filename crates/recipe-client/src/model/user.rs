use super::UserId;
use api_framework::ApiEntity;
use serde::{Deserialize, Serialize};

/// A registered user. Embedded by value as the author or party of other records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl User {
    /// "First Last", or the username when both names are blank.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }
}

impl ApiEntity for User {
    type Id = UserId;
    const COLLECTION: &'static str = "users";
    const NAME: &'static str = "User";
}
