//! Storage backend implementations.
//!
//! Concrete implementations of the repository traits defined in
//! `stockroom_core::storage`.

pub mod sqlite;

pub use sqlite::SqliteRepository;
