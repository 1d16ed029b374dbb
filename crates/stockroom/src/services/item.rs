//! Item service.
//!
//! Mirrors the user service with one added rule: an item can only be created
//! for an owner that exists at creation time.

use std::sync::Arc;

use stockroom_core::record::{apply_item_patch, Item, ItemPatch, NewItem};
use stockroom_core::storage::{ItemRepository, RepositoryError, Result, UserRepository};

/// Operations over the item collection.
#[derive(Clone)]
pub struct ItemService {
    repo: Arc<dyn ItemRepository>,
    /// Needed for the ownership-existence check on create.
    users: Arc<dyn UserRepository>,
}

impl ItemService {
    pub fn new(repo: Arc<dyn ItemRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { repo, users }
    }

    /// Creates a new item owned by `owner_id`.
    ///
    /// The owner must exist; otherwise this fails with
    /// `NotFound("User", owner_id)` and persists nothing.
    pub async fn create(&self, item: NewItem, owner_id: i64) -> Result<Item> {
        if self.users.get_user(owner_id).await?.is_none() {
            tracing::warn!(user_id = owner_id, "User not found");
            return Err(RepositoryError::NotFound {
                entity: "User",
                id: owner_id,
            });
        }

        let created = self.repo.create_item(&item, owner_id).await.inspect_err(|e| {
            tracing::error!(error = %e, "Failed to create item");
        })?;
        tracing::info!(item_id = created.id, owner_id, "Item created");
        Ok(created)
    }

    /// Lists items ordered by ascending id.
    pub async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Item>> {
        let items = self.repo.list_items(offset, limit).await.inspect_err(|e| {
            tracing::error!(error = %e, "Failed to retrieve items");
        })?;
        tracing::info!(count = items.len(), offset, limit, "Items retrieved");
        Ok(items)
    }

    /// Gets an item by id. Absence is a normal result.
    pub async fn get(&self, id: i64) -> Result<Option<Item>> {
        let item = self.repo.get_item(id).await.inspect_err(|e| {
            tracing::error!(error = %e, "Failed to retrieve item");
        })?;
        if item.is_none() {
            tracing::warn!(item_id = id, "Item not found");
        }
        Ok(item)
    }

    /// Applies a partial update to an existing item and returns the updated
    /// record. The stored owner is never changed, whatever the payload says.
    pub async fn update(&self, id: i64, patch: ItemPatch) -> Result<Item> {
        let mut item = self.get(id).await?.ok_or(RepositoryError::NotFound {
            entity: "Item",
            id,
        })?;

        apply_item_patch(&mut item, patch);
        self.repo.update_item(&item).await.inspect_err(|e| {
            tracing::error!(error = %e, "Failed to update item");
        })?;
        tracing::info!(item_id = id, "Item updated");
        Ok(item)
    }

    /// Deletes an item. Fails with `NotFound` if the id is absent.
    pub async fn delete(&self, id: i64) -> Result<()> {
        if self.get(id).await?.is_none() {
            return Err(RepositoryError::NotFound {
                entity: "Item",
                id,
            });
        }

        self.repo.delete_item(id).await.inspect_err(|e| {
            tracing::error!(error = %e, "Failed to delete item");
        })?;
        tracing::info!(item_id = id, "Item deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::UserService;
    use crate::storage::SqliteRepository;
    use stockroom_core::record::NewUser;

    struct Fixture {
        users: UserService,
        items: ItemService,
    }

    async fn fixture() -> Fixture {
        let repo = Arc::new(SqliteRepository::new_in_memory().await.unwrap());
        Fixture {
            users: UserService::new(repo.clone()),
            items: ItemService::new(repo.clone(), repo),
        }
    }

    fn new_item(title: &str) -> NewItem {
        NewItem {
            title: title.to_string(),
            description: Some("This is a test item".to_string()),
        }
    }

    async fn create_owner(fx: &Fixture) -> i64 {
        fx.users
            .create(NewUser {
                username: "testuser".to_string(),
                email: "test@example.com".to_string(),
                password: "testpassword".to_string(),
            })
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn test_create_requires_existing_owner_and_persists_nothing() {
        let fx = fixture().await;

        let err = fx.items.create(new_item("Test Item"), 999).await.unwrap_err();

        assert_eq!(
            err,
            RepositoryError::NotFound {
                entity: "User",
                id: 999
            }
        );
        assert!(fx.items.list(0, 100).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_sets_owner_id() {
        let fx = fixture().await;
        let owner_id = create_owner(&fx).await;

        let item = fx.items.create(new_item("Test Item"), owner_id).await.unwrap();

        assert_eq!(item.owner_id, owner_id);
        assert_eq!(fx.items.get(item.id).await.unwrap(), Some(item));
    }

    #[tokio::test]
    async fn test_deleting_owner_removes_all_owned_items() {
        let fx = fixture().await;
        let owner_id = create_owner(&fx).await;

        let mut ids = Vec::new();
        for i in 0..3 {
            let item = fx
                .items
                .create(new_item(&format!("item-{i}")), owner_id)
                .await
                .unwrap();
            ids.push(item.id);
        }

        fx.users.delete(owner_id).await.unwrap();

        for id in ids {
            assert_eq!(fx.items.get(id).await.unwrap(), None);
        }
    }

    #[tokio::test]
    async fn test_update_merges_without_touching_owner() {
        let fx = fixture().await;
        let owner_id = create_owner(&fx).await;
        let item = fx.items.create(new_item("Test Item"), owner_id).await.unwrap();

        let updated = fx
            .items
            .update(
                item.id,
                ItemPatch {
                    title: Some("Updated Item".to_string()),
                    description: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "Updated Item");
        assert_eq!(updated.description, item.description);
        assert_eq!(updated.owner_id, owner_id);
    }

    #[tokio::test]
    async fn test_not_found_symmetry_across_operations() {
        let fx = fixture().await;
        let expected = RepositoryError::NotFound {
            entity: "Item",
            id: 999,
        };

        assert_eq!(fx.items.get(999).await.unwrap(), None);
        assert_eq!(
            fx.items.update(999, ItemPatch::default()).await.unwrap_err(),
            expected
        );
        assert_eq!(fx.items.delete(999).await.unwrap_err(), expected);
        assert_eq!(expected.to_string(), "Item not found with ID: 999");
    }
}
