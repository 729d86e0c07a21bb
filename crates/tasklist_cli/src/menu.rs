//! Numbered-menu front end.
//!
//! # Responsibility
//! - Offer the same operations as the command session through a 1-7 menu
//!   with follow-up prompts.
//!
//! # Invariants
//! - Only incomplete todos are offered for completion.
//! - Complete/update/delete short-circuit with a message on an empty list
//!   (or, for complete, when everything is already done).
//! - End of input at any prompt stops the menu and prints the summary.

use crate::formatter::{
    format_added, format_completed, format_deleted, format_error, format_todo, format_updated,
};
use crate::input::{InputLine, LineReader, NOT_UTF8_MESSAGE};
use crate::parser::parse_id;
use crate::session::{write_banner, write_farewell};
use log::{debug, info, warn};
use std::io::{self, BufRead, Write};
use tasklist_core::{Todo, TodoRepository, TodoService};

const MENU_TEXT: &str = "1. View todos
2. Add todo
3. Complete todo
4. Update todo
5. Delete todo
6. Help
7. Exit";

const MENU_HELP_TEXT: &str = "--- Help ---
1. View todos - See all your tasks
2. Add todo - Create a new task
3. Complete todo - Mark task as done
4. Update todo - Change task text
5. Delete todo - Remove a task
6. Help - Show this help
7. Exit - Close the app";

const INVALID_NUMBER: &str = "Invalid number!";
const CANNOT_BE_EMPTY: &str = "Cannot be empty!";

/// Answer to a follow-up prompt.
enum Reply {
    Text(String),
    /// Prompt was answered with unusable bytes; already reported.
    Skipped,
    Eof,
}

pub struct MenuSession<R: TodoRepository> {
    service: TodoService<R>,
}

impl<R: TodoRepository> MenuSession<R> {
    pub fn new(service: TodoService<R>) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &TodoService<R> {
        &self.service
    }

    /// Runs until `7` or end of input, then prints the summary.
    ///
    /// # Errors
    /// Returns I/O errors from reading `input` or writing `output`.
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> io::Result<()> {
        write_banner(&mut output)?;
        info!("event=session_start module=cli status=ok mode=menu");

        let mut lines = LineReader::new(input);
        loop {
            writeln!(output, "\n{}\n{MENU_TEXT}\n{}", rule(), rule())?;
            let choice = match prompt(&mut lines, &mut output, "\nEnter number (1-7): ")? {
                Reply::Text(choice) => choice,
                Reply::Skipped => continue,
                Reply::Eof => break,
            };
            let keep_going = match choice.as_str() {
                "" => true,
                "1" => self.view(&mut output).map(|()| true)?,
                "2" => self.add(&mut lines, &mut output)?,
                "3" => self.complete(&mut lines, &mut output)?,
                "4" => self.update(&mut lines, &mut output)?,
                "5" => self.delete(&mut lines, &mut output)?,
                "6" => writeln!(output, "\n{MENU_HELP_TEXT}").map(|()| true)?,
                "7" => false,
                _ => writeln!(output, "\nInvalid choice. Please enter 1-7.").map(|()| true)?,
            };
            if !keep_going {
                break;
            }
        }

        writeln!(output)?;
        write_farewell(&self.service, output)
    }

    fn view(&self, mut output: impl Write) -> io::Result<()> {
        writeln!(output, "\n--- Your Todos ---")?;
        let todos = self.service.list_all();
        if todos.is_empty() {
            return writeln!(output, "No todos yet. Add one!");
        }
        write_todos(&todos, output)
    }

    fn add<B: BufRead>(
        &mut self,
        lines: &mut LineReader<B>,
        mut output: impl Write,
    ) -> io::Result<bool> {
        let text = match prompt(lines, &mut output, "\nEnter todo: ")? {
            Reply::Text(text) => text,
            Reply::Skipped => return Ok(true),
            Reply::Eof => return Ok(false),
        };
        if text.is_empty() {
            writeln!(output, "{CANNOT_BE_EMPTY}")?;
            return Ok(true);
        }
        match self.service.add(&text) {
            Ok(todo) => writeln!(output, "{}", format_added(&todo))?,
            Err(err) => writeln!(output, "{}", format_error(err))?,
        }
        Ok(true)
    }

    fn complete<B: BufRead>(
        &mut self,
        lines: &mut LineReader<B>,
        mut output: impl Write,
    ) -> io::Result<bool> {
        let open: Vec<Todo> = self
            .service
            .list_all()
            .into_iter()
            .filter(|todo| !todo.is_completed())
            .collect();
        if open.is_empty() {
            writeln!(output, "\nAll done!")?;
            return Ok(true);
        }
        writeln!(output, "\n--- Incomplete Todos ---")?;
        write_todos(&open, &mut output)?;

        let raw = match prompt(lines, &mut output, "\nEnter number to complete: ")? {
            Reply::Text(raw) => raw,
            Reply::Skipped => return Ok(true),
            Reply::Eof => return Ok(false),
        };
        let Some(id) = parse_id(&raw) else {
            writeln!(output, "{INVALID_NUMBER}")?;
            return Ok(true);
        };
        match self.service.complete(id) {
            Ok(todo) => writeln!(output, "{}", format_completed(&todo))?,
            Err(err) => writeln!(output, "{}", format_error(err))?,
        }
        Ok(true)
    }

    fn update<B: BufRead>(
        &mut self,
        lines: &mut LineReader<B>,
        mut output: impl Write,
    ) -> io::Result<bool> {
        if !self.show_all_or(&mut output, "No todos to update!")? {
            return Ok(true);
        }
        let raw = match prompt(lines, &mut output, "\nEnter number to update: ")? {
            Reply::Text(raw) => raw,
            Reply::Skipped => return Ok(true),
            Reply::Eof => return Ok(false),
        };
        let text = match prompt(lines, &mut output, "Enter new text: ")? {
            Reply::Text(text) => text,
            Reply::Skipped => return Ok(true),
            Reply::Eof => return Ok(false),
        };
        if text.is_empty() {
            writeln!(output, "{CANNOT_BE_EMPTY}")?;
            return Ok(true);
        }
        let Some(id) = parse_id(&raw) else {
            writeln!(output, "{INVALID_NUMBER}")?;
            return Ok(true);
        };
        match self.service.update(id, &text) {
            Ok(todo) => writeln!(output, "{}", format_updated(&todo))?,
            Err(err) => writeln!(output, "{}", format_error(err))?,
        }
        Ok(true)
    }

    fn delete<B: BufRead>(
        &mut self,
        lines: &mut LineReader<B>,
        mut output: impl Write,
    ) -> io::Result<bool> {
        if !self.show_all_or(&mut output, "No todos to delete!")? {
            return Ok(true);
        }
        let raw = match prompt(lines, &mut output, "\nEnter number to delete: ")? {
            Reply::Text(raw) => raw,
            Reply::Skipped => return Ok(true),
            Reply::Eof => return Ok(false),
        };
        let Some(id) = parse_id(&raw) else {
            writeln!(output, "{INVALID_NUMBER}")?;
            return Ok(true);
        };
        match self.service.delete(id) {
            Ok(todo) => writeln!(output, "{}", format_deleted(&todo))?,
            Err(err) => writeln!(output, "{}", format_error(err))?,
        }
        Ok(true)
    }

    /// Prints every todo, or `empty_message` when there are none.
    /// Returns whether anything was listed.
    fn show_all_or(&self, mut output: impl Write, empty_message: &str) -> io::Result<bool> {
        let todos = self.service.list_all();
        if todos.is_empty() {
            writeln!(output, "\n{empty_message}")?;
            return Ok(false);
        }
        writeln!(output, "\n--- Your Todos ---")?;
        write_todos(&todos, output)?;
        Ok(true)
    }
}

fn prompt<B: BufRead>(
    lines: &mut LineReader<B>,
    mut output: impl Write,
    text: &str,
) -> io::Result<Reply> {
    write!(output, "{text}")?;
    output.flush()?;
    match lines.next_line()? {
        InputLine::Text(line) => Ok(Reply::Text(line.trim().to_string())),
        InputLine::NotUtf8 => {
            warn!("event=input_rejected module=cli status=error reason=not_utf8");
            writeln!(output, "{}", format_error(NOT_UTF8_MESSAGE))?;
            Ok(Reply::Skipped)
        }
        InputLine::Eof => {
            debug!("event=session_eof module=cli status=ok");
            Ok(Reply::Eof)
        }
    }
}

fn write_todos(todos: &[Todo], mut output: impl Write) -> io::Result<()> {
    for todo in todos {
        writeln!(output, "{}", format_todo(todo))?;
    }
    Ok(())
}

fn rule() -> String {
    "-".repeat(40)
}

#[cfg(test)]
mod tests {
    use super::MenuSession;
    use std::io::Cursor;
    use tasklist_core::{TodoService, TodoStore};

    fn run(script: &str) -> (MenuSession<TodoStore>, String) {
        let mut menu = MenuSession::new(TodoService::new(TodoStore::new()));
        let mut out = Vec::new();
        menu.run(Cursor::new(script.to_string()), &mut out).unwrap();
        (menu, String::from_utf8(out).unwrap())
    }

    #[test]
    fn empty_list_short_circuits_follow_up_prompts() {
        let (_, out) = run("1\n3\n4\n5\n7\n");

        assert!(out.contains("No todos yet. Add one!"));
        assert!(out.contains("All done!"));
        assert!(out.contains("No todos to update!"));
        assert!(out.contains("No todos to delete!"));
        assert!(!out.contains("Enter number to"));
    }

    #[test]
    fn unknown_choice_is_reported() {
        let (_, out) = run("9\n7\n");
        assert!(out.contains("Invalid choice. Please enter 1-7."));
    }
}
