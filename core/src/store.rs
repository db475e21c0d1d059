//! In-memory todo registry.
//!
//! # Design
//! Ids come from a monotonic counter, so they are strictly increasing and
//! never reused. Keying the map by the numeric id keeps iteration in
//! insertion order without a separate index. A string id that does not parse
//! as an integer can never match a stored key, so lookups with it simply
//! miss instead of panicking or erroring.

use std::collections::BTreeMap;

use chrono::Utc;

use crate::types::{Todo, UpdateTodo};

/// Authoritative in-memory registry of [`Todo`] records, keyed by id.
///
/// Single-threaded by itself: callers serving concurrent requests must wrap
/// the store in a lock held across each whole operation.
#[derive(Debug, Default)]
pub struct TodoStore {
    todos: BTreeMap<u64, Todo>,
    counter: u64,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All todos in insertion order.
    pub fn get_all(&self) -> Vec<Todo> {
        self.todos.values().cloned().collect()
    }

    pub fn get_by_id(&self, id: &str) -> Option<Todo> {
        self.todos.get(&parse_id(id)?).cloned()
    }

    /// Allocates the next id and stores a new todo with the given title.
    ///
    /// The title is trimmed before storage. Rejecting empty titles is the
    /// boundary's job, not the store's.
    pub fn create(&mut self, title: &str) -> Todo {
        self.counter += 1;
        let id = self.counter;
        let todo = Todo {
            id: id.to_string(),
            title: title.trim().to_string(),
            completed: false,
            created_at: Utc::now(),
        };
        self.todos.insert(id, todo.clone());
        todo
    }

    /// Applies the fields present in `patch` to the todo with this id,
    /// leaving omitted fields untouched. Returns the merged record, or
    /// `None` if no todo exists for `id`.
    pub fn update(&mut self, id: &str, patch: UpdateTodo) -> Option<Todo> {
        let todo = self.todos.get_mut(&parse_id(id)?)?;
        if let Some(title) = patch.title {
            todo.title = title.trim().to_string();
        }
        if let Some(completed) = patch.completed {
            todo.completed = completed;
        }
        Some(todo.clone())
    }

    /// Removes the todo if present; reports whether anything was removed.
    pub fn delete(&mut self, id: &str) -> bool {
        match parse_id(id) {
            Some(key) => self.todos.remove(&key).is_some(),
            None => false,
        }
    }

    /// Empties the store and resets the id counter, so the next [`create`]
    /// hands out `"1"` again.
    ///
    /// [`create`]: TodoStore::create
    pub fn clear(&mut self) {
        self.todos.clear();
        self.counter = 0;
    }
}

fn parse_id(id: &str) -> Option<u64> {
    id.parse().ok()
}
