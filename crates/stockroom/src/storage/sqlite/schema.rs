//! SQLite schema definitions and SQL query constants.
//!
//! All SQL used by the SQLite repository lives here as pure data, no I/O.

/// SQL statement to create all tables.
///
/// `items.owner_id` cascades on user deletion; the cascade only fires when
/// `PRAGMA foreign_keys = ON` is set on the connection (see repository).
pub const CREATE_TABLES: &str = r#"
-- Users table
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL,
    email TEXT NOT NULL,
    password TEXT NOT NULL
);

-- Items table
CREATE TABLE IF NOT EXISTS items (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT,
    owner_id INTEGER NOT NULL,
    FOREIGN KEY (owner_id) REFERENCES users(id) ON DELETE CASCADE
);

-- Indexes for efficient lookups
CREATE INDEX IF NOT EXISTS idx_users_username ON users(username);
CREATE INDEX IF NOT EXISTS idx_users_email ON users(email);
CREATE INDEX IF NOT EXISTS idx_items_owner_id ON items(owner_id);
"#;

// User queries
pub const INSERT_USER: &str = r#"
INSERT INTO users (username, email, password)
VALUES (?1, ?2, ?3)
"#;

pub const SELECT_USER_BY_ID: &str = r#"
SELECT id, username, email, password
FROM users
WHERE id = ?1
"#;

pub const SELECT_USERS_PAGE: &str = r#"
SELECT id, username, email, password
FROM users
ORDER BY id ASC
LIMIT ?1 OFFSET ?2
"#;

pub const UPDATE_USER: &str = r#"
UPDATE users
SET username = ?2, email = ?3, password = ?4
WHERE id = ?1
"#;

pub const DELETE_USER: &str = r#"
DELETE FROM users
WHERE id = ?1
"#;

// Item queries
pub const INSERT_ITEM: &str = r#"
INSERT INTO items (title, description, owner_id)
VALUES (?1, ?2, ?3)
"#;

pub const SELECT_ITEM_BY_ID: &str = r#"
SELECT id, title, description, owner_id
FROM items
WHERE id = ?1
"#;

pub const SELECT_ITEMS_PAGE: &str = r#"
SELECT id, title, description, owner_id
FROM items
ORDER BY id ASC
LIMIT ?1 OFFSET ?2
"#;

pub const UPDATE_ITEM: &str = r#"
UPDATE items
SET title = ?2, description = ?3
WHERE id = ?1
"#;

pub const DELETE_ITEM: &str = r#"
DELETE FROM items
WHERE id = ?1
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tables_defines_both_tables() {
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS users"));
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS items"));
        assert!(CREATE_TABLES.contains("ON DELETE CASCADE"));
    }

    #[test]
    fn test_update_item_never_touches_owner() {
        assert!(!UPDATE_ITEM.contains("owner_id"));
    }

    #[test]
    fn test_pages_are_ordered_by_ascending_id() {
        assert!(SELECT_USERS_PAGE.contains("ORDER BY id ASC"));
        assert!(SELECT_ITEMS_PAGE.contains("ORDER BY id ASC"));
    }
}
