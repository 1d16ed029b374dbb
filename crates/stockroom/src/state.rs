//! Application state.
//!
//! The shared state passed to all request handlers: the user and item
//! services, each holding repository trait objects over the storage backend.
//! Services are stateless, so the state is cheap to clone per request.

use std::sync::Arc;

use stockroom_core::storage::{ItemRepository, UserRepository};

use crate::config::Config;
use crate::services::{ItemService, UserService};
use crate::storage::SqliteRepository;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub users: UserService,
    pub items: ItemService,
}

impl AppState {
    /// Creates AppState backed by the SQLite database from the
    /// configuration.
    pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
        let repo = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);
        Ok(Self::from_repository(repo))
    }

    /// Creates AppState backed by an in-memory database. Useful for tests.
    pub async fn new_in_memory() -> Result<Self, anyhow::Error> {
        let repo = Arc::new(SqliteRepository::new_in_memory().await?);
        Ok(Self::from_repository(repo))
    }

    fn from_repository(repo: Arc<SqliteRepository>) -> Self {
        let users_repo: Arc<dyn UserRepository> = repo.clone();
        let items_repo: Arc<dyn ItemRepository> = repo;

        Self {
            users: UserService::new(users_repo.clone()),
            items: ItemService::new(items_repo, users_repo),
        }
    }
}
