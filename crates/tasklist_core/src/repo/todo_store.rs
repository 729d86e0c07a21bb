//! Todo repository contract and in-memory store.
//!
//! # Responsibility
//! - Hold the ordered collection of records and assign identifiers.
//! - Provide primitive CRUD keyed by `TodoId` without business validation.
//!
//! # Invariants
//! - Insertion order is the canonical iteration order.
//! - `update`/`complete` replace a record in place, keeping its position.
//! - The id counter only grows; deleted ids are never reissued.
//! - Absence is reported through `Option`/`bool`, never as an error.
//!
//! # Concurrency
//! - `TodoStore` has no internal locking. Callers sharing one store across
//!   threads must serialize access themselves (e.g. an outer `Mutex`).

use crate::model::todo::{Todo, TodoId, TodoValidationError};

/// Repository interface for todo CRUD operations.
///
/// Implementations trust their caller for title rules; record construction
/// invariants are still checked and treated as programming errors.
pub trait TodoRepository {
    fn add(&mut self, title: &str) -> Todo;
    fn get_by_id(&self, id: TodoId) -> Option<Todo>;
    fn get_all(&self) -> Vec<Todo>;
    fn update(&mut self, id: TodoId, title: &str) -> Option<Todo>;
    fn complete(&mut self, id: TodoId) -> Option<Todo>;
    fn delete(&mut self, id: TodoId) -> bool;
}

/// In-memory, insertion-ordered todo store.
#[derive(Debug)]
pub struct TodoStore {
    todos: Vec<Todo>,
    next_id: TodoId,
}

impl TodoStore {
    pub fn new() -> Self {
        Self {
            todos: Vec::new(),
            next_id: 1,
        }
    }

    fn position(&self, id: TodoId) -> Option<usize> {
        self.todos.iter().position(|todo| todo.id() == id)
    }

    /// Swaps the record at `index` for `build(current)` and returns a copy.
    fn replace_at(&mut self, index: usize, build: impl FnOnce(&Todo) -> Todo) -> Todo {
        let replacement = build(&self.todos[index]);
        self.todos[index] = replacement.clone();
        replacement
    }
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoRepository for TodoStore {
    /// Appends a new open record with the next id.
    ///
    /// # Panics
    /// Panics when `title` breaks record invariants. Title rules belong to
    /// the service layer; reaching this path means a caller skipped them.
    fn add(&mut self, title: &str) -> Todo {
        let todo = expect_valid(Todo::new(self.next_id, title));
        self.todos.push(todo.clone());
        self.next_id += 1;
        todo
    }

    fn get_by_id(&self, id: TodoId) -> Option<Todo> {
        self.todos.iter().find(|todo| todo.id() == id).cloned()
    }

    fn get_all(&self) -> Vec<Todo> {
        self.todos.clone()
    }

    /// # Panics
    /// Panics when `title` breaks record invariants (see [`TodoStore::add`]).
    fn update(&mut self, id: TodoId, title: &str) -> Option<Todo> {
        let index = self.position(id)?;
        Some(self.replace_at(index, |current| expect_valid(current.with_title(title))))
    }

    fn complete(&mut self, id: TodoId) -> Option<Todo> {
        let index = self.position(id)?;
        Some(self.replace_at(index, Todo::mark_completed))
    }

    fn delete(&mut self, id: TodoId) -> bool {
        match self.position(id) {
            Some(index) => {
                self.todos.remove(index);
                true
            }
            None => false,
        }
    }
}

fn expect_valid(result: Result<Todo, TodoValidationError>) -> Todo {
    match result {
        Ok(todo) => todo,
        Err(err) => panic!("todo store received an invalid record: {err}"),
    }
}
