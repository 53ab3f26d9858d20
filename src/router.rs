use axum::{
    Router,
    routing::{get, post},
};

use crate::db::TodoStore;
use crate::handlers::todos::{add_todo, delete_todo, list_todos, toggle_todo};

/// Shared handler state. The store is injected by the caller.
#[derive(Clone)]
pub struct TodoState {
    pub store: TodoStore,
}

impl TodoState {
    pub fn new(store: TodoStore) -> Self {
        Self { store }
    }
}

pub fn todo_router(state: TodoState) -> Router {
    Router::new()
        .route("/", get(list_todos))
        .route("/add", post(add_todo))
        .route("/toggle/{id}", get(toggle_todo))
        .route("/delete/{id}", get(delete_todo))
        .with_state(state)
}
