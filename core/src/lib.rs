//! In-memory store and wire types for the todo service.
//!
//! # Overview
//! Owns the authoritative mapping from id to [`Todo`] plus the monotonic id
//! counter. Pure in-memory logic with no I/O and no web-framework types; the
//! server crate layers validation and HTTP status mapping on top.
//!
//! # Design
//! - `TodoStore` is single-threaded by itself. Callers serving requests from
//!   multiple threads wrap it in their own lock, held across each whole
//!   operation.
//! - Reads hand out owned clones, so no caller keeps references into the map.
//! - Request DTOs use `Option` per field to distinguish "absent" from a
//!   value, which is what drives partial-update semantics.

pub mod store;
pub mod types;

pub use store::TodoStore;
pub use types::{CreateTodo, Todo, UpdateTodo};
