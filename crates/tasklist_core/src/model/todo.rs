//! Todo domain model.
//!
//! # Responsibility
//! - Define the single record shape managed by the task list.
//! - Own the title rule shared by construction and the service layer.
//!
//! # Invariants
//! - `id >= 1` for every constructed record.
//! - `title` is never blank after trimming.
//! - `title` holds at most `MAX_TITLE_CHARS` characters (raw, untrimmed).
//! - Records are values: changes build a new `Todo`, never mutate one.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable numeric identifier assigned by the store.
///
/// Identifiers start at 1 and are never reissued after deletion.
pub type TodoId = u64;

/// Upper bound for title length, counted in characters before trimming.
pub const MAX_TITLE_CHARS: usize = 1000;

/// Record construction failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoValidationError {
    /// Identifier below 1.
    InvalidId(u64),
    /// Title is empty or whitespace-only.
    EmptyTitle,
    /// Title exceeds `MAX_TITLE_CHARS`.
    TitleTooLong { length: usize, max: usize },
}

impl Display for TodoValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidId(id) => write!(f, "todo ID must be positive, got {id}"),
            Self::EmptyTitle => write!(f, "description cannot be empty"),
            Self::TitleTooLong { length, max } => write!(
                f,
                "description too long ({length} characters, max {max})"
            ),
        }
    }
}

impl Error for TodoValidationError {}

/// Checks a raw title against the shared title rule.
///
/// Blank input is reported before length so whitespace-only titles of any
/// size fail as `EmptyTitle`.
pub fn validate_title(title: &str) -> Result<(), TodoValidationError> {
    if title.trim().is_empty() {
        return Err(TodoValidationError::EmptyTitle);
    }
    let length = title.chars().count();
    if length > MAX_TITLE_CHARS {
        return Err(TodoValidationError::TitleTooLong {
            length,
            max: MAX_TITLE_CHARS,
        });
    }
    Ok(())
}

/// One task list entry.
///
/// Fields are private so a constructed value can only be observed, not
/// edited. Callers get clones from the store, which keeps returned records
/// detached from stored state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TodoWire")]
pub struct Todo {
    id: TodoId,
    title: String,
    completed: bool,
}

impl Todo {
    /// Creates an open (not completed) record.
    pub fn new(id: TodoId, title: impl Into<String>) -> Result<Self, TodoValidationError> {
        Self::with_state(id, title, false)
    }

    /// Creates a record with an explicit completion flag.
    ///
    /// # Errors
    /// - `InvalidId` when `id == 0`.
    /// - `EmptyTitle` / `TitleTooLong` per [`validate_title`].
    pub fn with_state(
        id: TodoId,
        title: impl Into<String>,
        completed: bool,
    ) -> Result<Self, TodoValidationError> {
        if id < 1 {
            return Err(TodoValidationError::InvalidId(id));
        }
        let title = title.into();
        validate_title(&title)?;
        Ok(Self {
            id,
            title,
            completed,
        })
    }

    pub fn id(&self) -> TodoId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns a replacement value with a new title and the same id/flag.
    pub fn with_title(&self, title: impl Into<String>) -> Result<Self, TodoValidationError> {
        Self::with_state(self.id, title, self.completed)
    }

    /// Returns a replacement value flagged as completed.
    ///
    /// Already-completed records yield an equal value.
    pub fn mark_completed(&self) -> Self {
        Self {
            id: self.id,
            title: self.title.clone(),
            completed: true,
        }
    }
}

/// Unchecked decode shape; converted through `Todo::with_state`.
#[derive(Deserialize)]
struct TodoWire {
    id: TodoId,
    title: String,
    #[serde(default)]
    completed: bool,
}

impl TryFrom<TodoWire> for Todo {
    type Error = TodoValidationError;

    fn try_from(value: TodoWire) -> Result<Self, Self::Error> {
        Self::with_state(value.id, value.title, value.completed)
    }
}
