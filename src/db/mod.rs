//! Database module: models and schema for persistent storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite)
//! - `sqlite.rs`: the `TodoStore` operations

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{Title, TodoItem};
pub use sqlite::TodoStore;
