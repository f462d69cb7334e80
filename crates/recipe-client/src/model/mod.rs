//! Plain records exchanged verbatim with the API, implementing
//! [`ApiEntity`](api_framework::ApiEntity).
//!
//! Entities are created, mutated and deleted server-side only; the client reads
//! them and submits creation or update payloads. Identifiers are always
//! assigned by the server.

pub mod food_status;
pub mod friendship;
pub mod recipe;
pub mod user;
pub mod visibility;

pub use food_status::*;
pub use friendship::*;
pub use recipe::*;
pub use user::*;
pub use visibility::*;

/// Rejected identifier input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("id must be a positive integer, got {0:?}")]
pub struct InvalidId(pub String);

/// Declares a positive integer identifier type named `<Entity>Id`.
macro_rules! resource_id {
    ($entity:ident) => {
        paste::paste! {
            #[doc = "Server-assigned identifier of a [`" $entity "`]."]
            #[derive(
                Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
                serde::Serialize, serde::Deserialize,
            )]
            #[serde(try_from = "u64", into = "u64")]
            pub struct [<$entity Id>](pub u64);

            impl TryFrom<u64> for [<$entity Id>] {
                type Error = InvalidId;

                fn try_from(raw: u64) -> Result<Self, Self::Error> {
                    if raw == 0 {
                        Err(InvalidId(raw.to_string()))
                    } else {
                        Ok(Self(raw))
                    }
                }
            }

            impl From<[<$entity Id>]> for u64 {
                fn from(id: [<$entity Id>]) -> u64 {
                    id.0
                }
            }

            impl std::str::FromStr for [<$entity Id>] {
                type Err = InvalidId;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    let raw: u64 = s.trim().parse().map_err(|_| InvalidId(s.to_string()))?;
                    Self::try_from(raw)
                }
            }

            impl std::fmt::Display for [<$entity Id>] {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    std::fmt::Display::fmt(&self.0, f)
                }
            }
        }
    };
}

resource_id!(User);
resource_id!(Recipe);
resource_id!(FoodStatus);
resource_id!(Friendship);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_must_be_positive() {
        assert_eq!("7".parse::<RecipeId>(), Ok(RecipeId(7)));
        assert!("0".parse::<RecipeId>().is_err());
        assert!("-3".parse::<UserId>().is_err());
        assert!("abc".parse::<UserId>().is_err());
        assert!(serde_json::from_str::<FriendshipId>("0").is_err());
        assert_eq!(serde_json::from_str::<FoodStatusId>("12").unwrap(), FoodStatusId(12));
    }

    #[test]
    fn ids_render_as_plain_numbers() {
        assert_eq!(RecipeId(42).to_string(), "42");
        assert_eq!(serde_json::to_string(&UserId(3)).unwrap(), "3");
    }
}
