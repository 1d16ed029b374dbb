use serde::{Deserialize, Serialize};

/// A user record as stored.
///
/// The `password` field is persisted as given; it is never serialized to API
/// consumers (see [`UserPublic`]). Hashing is out of scope for this layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Storage-assigned identifier, immutable after creation.
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password: String,
}

/// The public view of a user, without credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPublic {
    pub id: i64,
    pub username: String,
    pub email: String,
}

impl From<User> for UserPublic {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
        }
    }
}

/// Request payload for creating a new user.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Partial update for a user.
///
/// Only fields present in the payload are applied; absent fields leave the
/// stored record untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserPatch {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// An item record as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Storage-assigned identifier, immutable after creation.
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    /// The owning user. Set at creation time and never reassigned.
    pub owner_id: i64,
}

/// Request payload for creating a new item.
///
/// The owner is supplied separately (as a query parameter at the boundary),
/// not as part of the body.
#[derive(Debug, Clone, Deserialize)]
pub struct NewItem {
    pub title: String,
    pub description: Option<String>,
}

/// Partial update for an item.
///
/// Deliberately carries no owner field: owner reassignment is unsupported,
/// so it is unrepresentable here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemPatch {
    pub title: Option<String>,
    pub description: Option<String>,
}
