use async_trait::async_trait;

use crate::record::{Item, NewItem, NewUser, User};

use super::Result;

/// Repository for user operations.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persists a new user and returns the stored record with its assigned id.
    async fn create_user(&self, user: &NewUser) -> Result<User>;

    /// Lists users ordered by ascending id, skipping `offset`, returning at
    /// most `limit`.
    async fn list_users(&self, offset: i64, limit: i64) -> Result<Vec<User>>;

    /// Gets a user by id. Absence is a normal result.
    async fn get_user(&self, id: i64) -> Result<Option<User>>;

    /// Updates an existing user. Fails with `NotFound` if the id is absent.
    async fn update_user(&self, user: &User) -> Result<()>;

    /// Deletes a user by id, cascading to all items it owns.
    /// Fails with `NotFound` if the id is absent.
    async fn delete_user(&self, id: i64) -> Result<()>;
}

/// Repository for item operations.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Persists a new item for the given owner and returns the stored record.
    ///
    /// Owner existence is the caller's responsibility; the backing store's
    /// foreign key is the last line of defense.
    async fn create_item(&self, item: &NewItem, owner_id: i64) -> Result<Item>;

    /// Lists items ordered by ascending id, skipping `offset`, returning at
    /// most `limit`.
    async fn list_items(&self, offset: i64, limit: i64) -> Result<Vec<Item>>;

    /// Gets an item by id. Absence is a normal result.
    async fn get_item(&self, id: i64) -> Result<Option<Item>>;

    /// Updates an existing item. The stored `owner_id` is never changed.
    /// Fails with `NotFound` if the id is absent.
    async fn update_item(&self, item: &Item) -> Result<()>;

    /// Deletes an item by id. Fails with `NotFound` if the id is absent.
    async fn delete_item(&self, id: i64) -> Result<()>;
}
