//! Human-readable rendering of records and session messages.

use tasklist_core::{CompletionSummary, Todo};

pub const EMPTY_LIST_MESSAGE: &str = "No todos found. Use 'add <text>' to create one.";

const HELP_TEXT: &str = "Available commands:
  list                - Show all todos
  add <text>          - Add a new todo
  complete <id>       - Mark todo as complete
  update <id> <text>  - Update todo description
  delete <id>         - Delete a todo
  help                - Show this help message
  exit / quit         - Exit the application";

/// One list line: `[X] [id] title` or `[ ] [id] title`.
pub fn format_todo(todo: &Todo) -> String {
    let marker = if todo.is_completed() { "[X]" } else { "[ ]" };
    format!("{marker} [{}] {}", todo.id(), todo.title())
}

/// Renders records in the given order, one per line.
pub fn format_list(todos: &[Todo]) -> String {
    if todos.is_empty() {
        return EMPTY_LIST_MESSAGE.to_string();
    }
    todos.iter().map(format_todo).collect::<Vec<_>>().join("\n")
}

pub fn format_added(todo: &Todo) -> String {
    confirmation("Added", todo)
}

pub fn format_completed(todo: &Todo) -> String {
    confirmation("Completed", todo)
}

pub fn format_updated(todo: &Todo) -> String {
    confirmation("Updated", todo)
}

pub fn format_deleted(todo: &Todo) -> String {
    confirmation("Deleted", todo)
}

pub fn format_error(message: impl std::fmt::Display) -> String {
    format!("Error: {message}")
}

pub fn format_help() -> &'static str {
    HELP_TEXT
}

pub fn format_summary(summary: CompletionSummary) -> String {
    format!("Completed: {}/{} todos", summary.completed, summary.total)
}

fn confirmation(verb: &str, todo: &Todo) -> String {
    format!("{verb}: [{}] {}", todo.id(), todo.title())
}
