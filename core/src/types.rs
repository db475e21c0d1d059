//! Wire DTOs for the todo API.
//!
//! # Design
//! Request payloads model field presence with `Option` per field. For
//! `UpdateTodo` this is what drives partial-update semantics: `None` means
//! "leave unchanged." For `CreateTodo`, `title` is optional at the serde
//! level so that a missing field reaches the handler as `None` (mapped to a
//! 400 with a stable body) instead of being rejected by the extractor.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single todo item, as stored and as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: String,
    pub title: String,
    pub completed: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Request payload for creating a new todo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub title: Option<String>,
}

/// Request payload for partially updating an existing todo. Only the fields
/// present in the JSON are applied; omitted fields remain unchanged. A JSON
/// `null` counts as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTodo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}
