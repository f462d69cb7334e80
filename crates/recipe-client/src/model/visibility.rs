use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Intended audience of a recipe or food status. Not enforced by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Private,
    /// Server default for new posts.
    #[default]
    Friends,
    FriendsNetwork,
    Public,
}

impl Visibility {
    pub const ALL: [Visibility; 4] = [
        Visibility::Private,
        Visibility::Friends,
        Visibility::FriendsNetwork,
        Visibility::Public,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Private => "private",
            Visibility::Friends => "friends",
            Visibility::FriendsNetwork => "friends_network",
            Visibility::Public => "public",
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("unknown visibility {0:?}, expected one of private, friends, friends_network, public")]
pub struct UnknownVisibility(pub String);

impl FromStr for Visibility {
    type Err = UnknownVisibility;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Visibility::ALL
            .into_iter()
            .find(|v| v.as_str() == s.trim())
            .ok_or_else(|| UnknownVisibility(s.to_string()))
    }
}

impl Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_match_display() {
        for visibility in Visibility::ALL {
            let wire = serde_json::to_value(visibility).unwrap();
            assert_eq!(wire, serde_json::Value::from(visibility.as_str()));
            assert_eq!(visibility.as_str().parse::<Visibility>(), Ok(visibility));
        }
    }

    #[test]
    fn unknown_visibility_is_rejected() {
        assert!(serde_json::from_str::<Visibility>("\"everyone\"").is_err());
        assert!("everyone".parse::<Visibility>().is_err());
    }
}
