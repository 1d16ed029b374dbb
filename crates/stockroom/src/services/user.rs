//! User service.

use std::sync::Arc;

use stockroom_core::record::{apply_user_patch, NewUser, User, UserPatch};
use stockroom_core::storage::{RepositoryError, Result, UserRepository};

/// Operations over the user collection.
#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// Creates a new user and returns the stored record with its assigned
    /// id. No duplicate check is performed.
    pub async fn create(&self, user: NewUser) -> Result<User> {
        let created = self.repo.create_user(&user).await.inspect_err(|e| {
            tracing::error!(error = %e, "Failed to create user");
        })?;
        tracing::info!(user_id = created.id, "User created");
        Ok(created)
    }

    /// Lists users ordered by ascending id. An empty page is a normal
    /// outcome.
    pub async fn list(&self, offset: i64, limit: i64) -> Result<Vec<User>> {
        let users = self.repo.list_users(offset, limit).await.inspect_err(|e| {
            tracing::error!(error = %e, "Failed to retrieve users");
        })?;
        tracing::info!(count = users.len(), offset, limit, "Users retrieved");
        Ok(users)
    }

    /// Gets a user by id. Absence is a normal result, not a fault; the
    /// boundary decides whether it becomes a 404.
    pub async fn get(&self, id: i64) -> Result<Option<User>> {
        let user = self.repo.get_user(id).await.inspect_err(|e| {
            tracing::error!(error = %e, "Failed to retrieve user");
        })?;
        if user.is_none() {
            tracing::warn!(user_id = id, "User not found");
        }
        Ok(user)
    }

    /// Applies a partial update to an existing user and returns the updated
    /// record. Fails with `NotFound` if the id is absent.
    pub async fn update(&self, id: i64, patch: UserPatch) -> Result<User> {
        let mut user = self.get(id).await?.ok_or(RepositoryError::NotFound {
            entity: "User",
            id,
        })?;

        apply_user_patch(&mut user, patch);
        self.repo.update_user(&user).await.inspect_err(|e| {
            tracing::error!(error = %e, "Failed to update user");
        })?;
        tracing::info!(user_id = id, "User updated");
        Ok(user)
    }

    /// Deletes a user and, via the storage cascade, every item it owns.
    /// Fails with `NotFound` if the id is absent.
    pub async fn delete(&self, id: i64) -> Result<()> {
        if self.get(id).await?.is_none() {
            return Err(RepositoryError::NotFound {
                entity: "User",
                id,
            });
        }

        self.repo.delete_user(id).await.inspect_err(|e| {
            tracing::error!(error = %e, "Failed to delete user");
        })?;
        tracing::info!(user_id = id, "User deleted");
        Ok(())
    }
}
