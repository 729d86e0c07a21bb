//! Core domain logic for the task list.
//! This crate is the single source of truth for record invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{
    default_log_level, init_logging, logging_status, LogConfig, LogLevel, LoggingError,
};
pub use model::todo::{validate_title, Todo, TodoId, TodoValidationError, MAX_TITLE_CHARS};
pub use repo::todo_store::{TodoRepository, TodoStore};
pub use service::todo_service::{
    CompletionSummary, TodoService, TodoServiceError, TodoServiceResult,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
