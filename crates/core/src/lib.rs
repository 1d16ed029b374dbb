//! Core types for the stockroom service.
//!
//! This crate holds everything the HTTP server and the storage backends
//! share: the record definitions, the partial-update merge rules, the
//! response envelope, and the repository traits with their error taxonomy.
//! It performs no I/O.

pub mod record;
pub mod response;
pub mod storage;
