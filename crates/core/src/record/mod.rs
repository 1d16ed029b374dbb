//! User and item record definitions.

mod merge;
mod types;

pub use merge::{apply_item_patch, apply_user_patch};
pub use types::{Item, ItemPatch, NewItem, NewUser, User, UserPatch, UserPublic};
