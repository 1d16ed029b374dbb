//! SQLite repository implementation.
//!
//! Implements the repository traits from `stockroom_core::storage` using
//! SQLite. Every mutating operation runs inside an explicit transaction:
//! the writes happen, then the transaction commits; any error before the
//! commit drops the transaction, which rolls it back, so a partial write is
//! never visible to subsequent reads.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use stockroom_core::record::{Item, NewItem, NewUser, User};
use stockroom_core::storage::{
    ItemRepository, RepositoryError, Result, UserRepository,
};

use super::error::{map_tokio_rusqlite_error, map_tokio_rusqlite_error_with_id};
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

fn row_to_user(row: &rusqlite::Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        username: row.get(1)?,
        email: row.get(2)?,
        password: row.get(3)?,
    })
}

fn row_to_item(row: &rusqlite::Row<'_>) -> rusqlite::Result<Item> {
    Ok(Item {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        owner_id: row.get(3)?,
    })
}

/// SQLite-based repository implementation.
///
/// Owns one connection; `tokio_rusqlite` serializes operations on a worker
/// thread, so each repository call is one unit of work against the store.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file is created if it doesn't exist. Schema tables are
    /// created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    ///
    /// SQLite ships with foreign keys off; the cascade from users to items
    /// only fires with the pragma enabled.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.pragma_update(None, "foreign_keys", true)
                .map_err(wrap_err)?;
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl UserRepository for SqliteRepository {
    async fn create_user(&self, user: &NewUser) -> Result<User> {
        let username = user.username.clone();
        let email = user.email.clone();
        let password = user.password.clone();

        self.conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;
                tx.execute(
                    schema::INSERT_USER,
                    rusqlite::params![username, email, password],
                )
                .map_err(wrap_err)?;
                let id = tx.last_insert_rowid();
                tx.commit().map_err(wrap_err)?;
                Ok(User {
                    id,
                    username,
                    email,
                    password,
                })
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn list_users(&self, offset: i64, limit: i64) -> Result<Vec<User>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_USERS_PAGE).map_err(wrap_err)?;
                let rows = stmt
                    .query_map(rusqlite::params![limit, offset], row_to_user)
                    .map_err(wrap_err)?;

                let mut users = Vec::new();
                for row_result in rows {
                    users.push(row_result.map_err(wrap_err)?);
                }
                Ok(users)
            })
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }

    async fn get_user(&self, id: i64) -> Result<Option<User>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_USER_BY_ID).map_err(wrap_err)?;
                match stmt.query_row([id], row_to_user) {
                    Ok(user) => Ok(Some(user)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "User", id))
    }

    async fn update_user(&self, user: &User) -> Result<()> {
        let id = user.id;
        let username = user.username.clone();
        let email = user.email.clone();
        let password = user.password.clone();

        self.conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;
                let rows = tx
                    .execute(
                        schema::UPDATE_USER,
                        rusqlite::params![id, username, email, password],
                    )
                    .map_err(wrap_err)?;
                if rows == 0 {
                    return Err(wrap_err(rusqlite::Error::QueryReturnedNoRows));
                }
                tx.commit().map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "User", id))
    }

    async fn delete_user(&self, id: i64) -> Result<()> {
        self.conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;
                let rows = tx.execute(schema::DELETE_USER, [id]).map_err(wrap_err)?;
                if rows == 0 {
                    return Err(wrap_err(rusqlite::Error::QueryReturnedNoRows));
                }
                tx.commit().map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "User", id))
    }
}

#[async_trait]
impl ItemRepository for SqliteRepository {
    async fn create_item(&self, item: &NewItem, owner_id: i64) -> Result<Item> {
        let title = item.title.clone();
        let description = item.description.clone();

        self.conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;
                tx.execute(
                    schema::INSERT_ITEM,
                    rusqlite::params![title, description, owner_id],
                )
                .map_err(wrap_err)?;
                let id = tx.last_insert_rowid();
                tx.commit().map_err(wrap_err)?;
                Ok(Item {
                    id,
                    title,
                    description,
                    owner_id,
                })
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn list_items(&self, offset: i64, limit: i64) -> Result<Vec<Item>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_ITEMS_PAGE).map_err(wrap_err)?;
                let rows = stmt
                    .query_map(rusqlite::params![limit, offset], row_to_item)
                    .map_err(wrap_err)?;

                let mut items = Vec::new();
                for row_result in rows {
                    items.push(row_result.map_err(wrap_err)?);
                }
                Ok(items)
            })
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }

    async fn get_item(&self, id: i64) -> Result<Option<Item>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_ITEM_BY_ID).map_err(wrap_err)?;
                match stmt.query_row([id], row_to_item) {
                    Ok(item) => Ok(Some(item)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Item", id))
    }

    async fn update_item(&self, item: &Item) -> Result<()> {
        let id = item.id;
        let title = item.title.clone();
        let description = item.description.clone();

        self.conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;
                let rows = tx
                    .execute(
                        schema::UPDATE_ITEM,
                        rusqlite::params![id, title, description],
                    )
                    .map_err(wrap_err)?;
                if rows == 0 {
                    return Err(wrap_err(rusqlite::Error::QueryReturnedNoRows));
                }
                tx.commit().map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Item", id))
    }

    async fn delete_item(&self, id: i64) -> Result<()> {
        self.conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;
                let rows = tx.execute(schema::DELETE_ITEM, [id]).map_err(wrap_err)?;
                if rows == 0 {
                    return Err(wrap_err(rusqlite::Error::QueryReturnedNoRows));
                }
                tx.commit().map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Item", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(username: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            password: "testpassword".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_get_user_round_trip() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();

        let created = repo.create_user(&new_user("testuser")).await.unwrap();
        let fetched = repo.get_user(created.id).await.unwrap();

        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn test_ids_are_assigned_in_ascending_order() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();

        let first = repo.create_user(&new_user("a")).await.unwrap();
        let second = repo.create_user(&new_user("b")).await.unwrap();

        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_get_missing_user_is_none() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();

        assert_eq!(repo.get_user(999).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_update_missing_user_is_not_found() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();

        let ghost = User {
            id: 999,
            username: "ghost".to_string(),
            email: "ghost@example.com".to_string(),
            password: "x".to_string(),
        };
        let err = repo.update_user(&ghost).await.unwrap_err();

        assert_eq!(
            err,
            RepositoryError::NotFound {
                entity: "User",
                id: 999
            }
        );
    }

    #[tokio::test]
    async fn test_delete_user_cascades_to_items() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();

        let owner = repo.create_user(&new_user("owner")).await.unwrap();
        let item = repo
            .create_item(
                &NewItem {
                    title: "Test Item".to_string(),
                    description: Some("This is a test item".to_string()),
                },
                owner.id,
            )
            .await
            .unwrap();

        repo.delete_user(owner.id).await.unwrap();

        assert_eq!(repo.get_item(item.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_list_items_pagination_window() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();

        let owner = repo.create_user(&new_user("owner")).await.unwrap();
        for i in 0..5 {
            repo.create_item(
                &NewItem {
                    title: format!("item-{i}"),
                    description: None,
                },
                owner.id,
            )
            .await
            .unwrap();
        }

        let page = repo.list_items(1, 2).await.unwrap();

        assert_eq!(page.len(), 2);
        assert_eq!(page[0].title, "item-1");
        assert_eq!(page[1].title, "item-2");
        assert!(page[0].id < page[1].id);
    }
}
