pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod views;

pub use db::{Title, TodoItem, TodoStore};
pub use error::TodoError;
