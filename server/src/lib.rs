//! Axum HTTP surface for the todo service.
//!
//! # Overview
//! Translates HTTP requests into [`TodoStore`] calls and store results into
//! responses with status codes and `{"error": ...}` bodies. Validation
//! (required / non-blank titles) happens here, at the boundary, before any
//! store mutation.
//!
//! # Design
//! - Each [`app`] call builds its own store, so tests can spin up any number
//!   of independent instances.
//! - axum serves from a multi-threaded runtime, so the store sits behind an
//!   `Arc<RwLock<_>>`; every handler holds the lock across its whole store
//!   call, keeping each operation atomic.

pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::{routing::get, Router};
use todo_core::TodoStore;
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Shared handle to the process-wide store.
pub type Db = Arc<RwLock<TodoStore>>;

/// Builds a fully-routed application around a fresh, empty store.
pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(TodoStore::new()));
    Router::new()
        .route("/todos", get(routes::list_todos).post(routes::create_todo))
        .route(
            "/todos/{id}",
            get(routes::get_todo)
                .patch(routes::update_todo)
                .delete(routes::delete_todo),
        )
        .with_state(db)
        .layer(TraceLayer::new_for_http())
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}
