//! Route handlers: one async fn per verb+path pair.
//!
//! Handlers validate input, call the store under the lock, and map absent
//! records to [`ApiError::TodoNotFound`]. The blank-title check on update
//! fires only when `title` is present in the body; an omitted title means
//! "leave unchanged."

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use todo_core::{CreateTodo, Todo, UpdateTodo};

use crate::{ApiError, Db};

pub async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    let todos = db.read().await;
    Json(todos.get_all())
}

pub async fn get_todo(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, ApiError> {
    let todos = db.read().await;
    todos.get_by_id(&id).map(Json).ok_or(ApiError::TodoNotFound)
}

pub async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<CreateTodo>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let title = input.title.as_deref().map(str::trim).unwrap_or_default();
    if title.is_empty() {
        return Err(ApiError::TitleRequired);
    }
    let todo = db.write().await.create(title);
    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(patch): Json<UpdateTodo>,
) -> Result<Json<Todo>, ApiError> {
    if let Some(title) = patch.title.as_deref() {
        if title.trim().is_empty() {
            return Err(ApiError::TitleEmpty);
        }
    }
    let mut todos = db.write().await;
    todos
        .update(&id, patch)
        .map(Json)
        .ok_or(ApiError::TodoNotFound)
}

pub async fn delete_todo(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let mut todos = db.write().await;
    if todos.delete(&id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::TodoNotFound)
    }
}
