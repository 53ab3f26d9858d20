use askama::Template;
use axum::{
    extract::State,
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use tracing::{debug, info};

use crate::middleware::{FormTitle, TodoId};
use crate::views::IndexTemplate;
use crate::{TodoError, router::TodoState};

pub const INDEX_PATH: &str = "/";

/// GET / -> every item, newest first.
pub async fn list_todos(State(state): State<TodoState>) -> Result<Html<String>, TodoError> {
    let todos = state.store.list_all_by_created_at_desc().await?;
    let page = IndexTemplate { todos: &todos };
    Ok(Html(page.render()?))
}

/// POST /add -> stores a new item. A missing or empty title is ignored.
pub async fn add_todo(
    State(state): State<TodoState>,
    FormTitle(title): FormTitle,
) -> Result<Response, TodoError> {
    match title {
        Some(title) => {
            let todo = state.store.insert(title).await?;
            info!(todo = %todo, "todo created");
        }
        None => debug!("empty title; nothing added"),
    }
    Ok(redirect_to_index())
}

/// GET /toggle/{id} -> flips `done`, 404 when the id is unknown.
pub async fn toggle_todo(
    State(state): State<TodoState>,
    TodoId(id): TodoId,
) -> Result<Response, TodoError> {
    let todo = state.store.toggle_done(id).await?;
    info!(id, done = todo.done, "todo toggled");
    Ok(redirect_to_index())
}

/// GET /delete/{id} -> removes the item, 404 when the id is unknown.
pub async fn delete_todo(
    State(state): State<TodoState>,
    TodoId(id): TodoId,
) -> Result<Response, TodoError> {
    state.store.delete(id).await?;
    info!(id, "todo deleted");
    Ok(redirect_to_index())
}

/// 302 back to the list so the browser re-reads the full page.
fn redirect_to_index() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, INDEX_PATH)]).into_response()
}
