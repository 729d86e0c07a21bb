//! Todo use-case service.
//!
//! # Responsibility
//! - Apply title validation before any write reaches the repository.
//! - Translate repository absence into typed `NotFound` failures.
//!
//! # Invariants
//! - This is the only layer producing business-rule errors.
//! - Validation runs before existence checks on `update`.
//! - A failed call leaves repository state unchanged.

use crate::model::todo::{validate_title, Todo, TodoId, TodoValidationError};
use crate::repo::todo_store::TodoRepository;
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type TodoServiceResult<T> = Result<T, TodoServiceError>;

/// Service error for todo use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoServiceError {
    /// Title rejected by the shared title rule.
    Validation(TodoValidationError),
    /// No record carries the requested id.
    NotFound(TodoId),
}

impl Display for TodoServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "todo with ID {id} not found"),
        }
    }
}

impl Error for TodoServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<TodoValidationError> for TodoServiceError {
    fn from(value: TodoValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Completed vs. total record counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompletionSummary {
    pub completed: usize,
    pub total: usize,
}

/// Use-case facade over an owned repository.
pub struct TodoService<R: TodoRepository> {
    repo: R,
}

impl<R: TodoRepository> TodoService<R> {
    /// Creates a service that takes ownership of `repo`.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Read-only access to the underlying repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Lists every record in insertion order.
    pub fn list_all(&self) -> Vec<Todo> {
        self.repo.get_all()
    }

    /// Creates one open record.
    ///
    /// # Errors
    /// - `Validation` when the title is blank or too long.
    pub fn add(&mut self, title: &str) -> TodoServiceResult<Todo> {
        check_title("add", title)?;
        let todo = self.repo.add(title);
        info!("event=todo_add module=service status=ok id={}", todo.id());
        Ok(todo)
    }

    /// Marks a record completed. Repeated calls succeed.
    ///
    /// # Errors
    /// - `NotFound` when `id` has no record.
    pub fn complete(&mut self, id: TodoId) -> TodoServiceResult<Todo> {
        let todo = self.repo.complete(id).ok_or_else(|| not_found("complete", id))?;
        info!("event=todo_complete module=service status=ok id={id}");
        Ok(todo)
    }

    /// Replaces a record title, keeping its completion flag and position.
    ///
    /// # Errors
    /// - `Validation` when the title is blank or too long (checked first).
    /// - `NotFound` when `id` has no record.
    pub fn update(&mut self, id: TodoId, title: &str) -> TodoServiceResult<Todo> {
        check_title("update", title)?;
        let todo = self
            .repo
            .update(id, title)
            .ok_or_else(|| not_found("update", id))?;
        info!("event=todo_update module=service status=ok id={id}");
        Ok(todo)
    }

    /// Removes a record and returns its last value.
    ///
    /// # Errors
    /// - `NotFound` when `id` has no record.
    pub fn delete(&mut self, id: TodoId) -> TodoServiceResult<Todo> {
        let todo = self.repo.get_by_id(id).ok_or_else(|| not_found("delete", id))?;
        self.repo.delete(id);
        info!("event=todo_delete module=service status=ok id={id}");
        Ok(todo)
    }

    /// Counts completed records against all live records.
    pub fn completion_summary(&self) -> CompletionSummary {
        let todos = self.repo.get_all();
        CompletionSummary {
            completed: todos.iter().filter(|todo| todo.is_completed()).count(),
            total: todos.len(),
        }
    }
}

fn check_title(op: &str, title: &str) -> Result<(), TodoValidationError> {
    validate_title(title).inspect_err(|err| {
        debug!("event=todo_{op} module=service status=rejected reason={err:?}");
    })
}

fn not_found(op: &str, id: TodoId) -> TodoServiceError {
    warn!("event=todo_{op} module=service status=not_found id={id}");
    TodoServiceError::NotFound(id)
}
