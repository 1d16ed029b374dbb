//! Partial-update merge rules.
//!
//! Each patch field is applied individually when present. `id` (and
//! `owner_id` for items) cannot be touched by a patch.

use super::types::{Item, ItemPatch, User, UserPatch};

/// Applies a [`UserPatch`] to a stored user, field by field.
pub fn apply_user_patch(user: &mut User, patch: UserPatch) {
    if let Some(username) = patch.username {
        user.username = username;
    }
    if let Some(email) = patch.email {
        user.email = email;
    }
    if let Some(password) = patch.password {
        user.password = password;
    }
}

/// Applies an [`ItemPatch`] to a stored item, field by field.
///
/// `description` follows the same present/absent rule as the other fields:
/// an absent field is left alone, a present one replaces the stored value.
pub fn apply_item_patch(item: &mut Item, patch: ItemPatch) {
    if let Some(title) = patch.title {
        item.title = title;
    }
    if let Some(description) = patch.description {
        item.description = Some(description);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: 1,
            username: "testuser".to_string(),
            email: "test@example.com".to_string(),
            password: "testpassword".to_string(),
        }
    }

    fn sample_item() -> Item {
        Item {
            id: 7,
            title: "Test Item".to_string(),
            description: Some("This is a test item".to_string()),
            owner_id: 1,
        }
    }

    #[test]
    fn test_user_patch_applies_only_present_fields() {
        let mut user = sample_user();

        apply_user_patch(
            &mut user,
            UserPatch {
                username: Some("x".to_string()),
                ..Default::default()
            },
        );

        assert_eq!(user.username, "x");
        assert_eq!(user.email, "test@example.com");
        assert_eq!(user.password, "testpassword");
    }

    #[test]
    fn test_user_patch_never_changes_id() {
        let mut user = sample_user();

        apply_user_patch(
            &mut user,
            UserPatch {
                username: Some("updateduser".to_string()),
                email: Some("updated@example.com".to_string()),
                password: Some("updatedpassword".to_string()),
            },
        );

        assert_eq!(user.id, 1);
        assert_eq!(user.email, "updated@example.com");
    }

    #[test]
    fn test_empty_user_patch_is_a_no_op() {
        let mut user = sample_user();
        let original = user.clone();

        apply_user_patch(&mut user, UserPatch::default());

        assert_eq!(user, original);
    }

    #[test]
    fn test_item_patch_applies_only_present_fields() {
        let mut item = sample_item();

        apply_item_patch(
            &mut item,
            ItemPatch {
                title: Some("Updated Item".to_string()),
                description: None,
            },
        );

        assert_eq!(item.title, "Updated Item");
        assert_eq!(item.description.as_deref(), Some("This is a test item"));
    }

    #[test]
    fn test_item_patch_leaves_owner_untouched() {
        let mut item = sample_item();

        apply_item_patch(
            &mut item,
            ItemPatch {
                title: Some("Updated Item".to_string()),
                description: Some("This is an updated item".to_string()),
            },
        );

        assert_eq!(item.owner_id, 1);
        assert_eq!(item.id, 7);
        assert_eq!(item.description.as_deref(), Some("This is an updated item"));
    }
}
