//! Interactive read-eval-print session.
//!
//! # Responsibility
//! - Own the one `TodoService` for a process run.
//! - Map parsed commands to service calls and print the outcome.
//!
//! # Invariants
//! - Parse and service failures are printed and the loop keeps going.
//! - Only `exit`/`quit`, end of input, or an I/O error stop the loop; a
//!   line that is not UTF-8 is reported and skipped.
//! - The completion summary is printed whenever the loop stops normally.

use crate::formatter::{
    format_added, format_completed, format_deleted, format_error, format_help, format_list,
    format_summary, format_updated,
};
use crate::input::{InputLine, LineReader, NOT_UTF8_MESSAGE};
use crate::parser::Command;
use log::{debug, info, warn};
use std::io::{self, BufRead, Write};
use tasklist_core::{core_version, TodoRepository, TodoService};

const BANNER: &str = "Task List";
const PROMPT: &str = "> ";

/// Whether the loop should keep reading after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

pub struct Session<R: TodoRepository> {
    service: TodoService<R>,
}

impl<R: TodoRepository> Session<R> {
    pub fn new(service: TodoService<R>) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &TodoService<R> {
        &self.service
    }

    /// Runs until exit or end of input, then prints the summary.
    ///
    /// # Errors
    /// Returns I/O errors from reading `input` or writing `output`.
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> io::Result<()> {
        write_banner(&mut output)?;
        writeln!(output, "Type 'help' for available commands.")?;
        info!("event=session_start module=cli status=ok mode=commands");

        let mut lines = LineReader::new(input);
        loop {
            write!(output, "{PROMPT}")?;
            output.flush()?;
            let line = match lines.next_line()? {
                InputLine::Text(line) => line,
                InputLine::NotUtf8 => {
                    warn!("event=input_rejected module=cli status=error reason=not_utf8");
                    writeln!(output, "{}", format_error(NOT_UTF8_MESSAGE))?;
                    continue;
                }
                InputLine::Eof => {
                    writeln!(output)?;
                    debug!("event=session_eof module=cli status=ok");
                    break;
                }
            };
            if self.handle_line(&line, &mut output)? == Flow::Stop {
                break;
            }
        }

        write_farewell(&self.service, output)
    }

    /// Executes one input line and writes its result.
    pub fn handle_line(&mut self, line: &str, mut output: impl Write) -> io::Result<Flow> {
        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(err) => {
                debug!("event=command_rejected module=cli status=error reason={err:?}");
                writeln!(output, "{}", format_error(err))?;
                return Ok(Flow::Continue);
            }
        };

        let rendered = match command {
            Command::Empty => return Ok(Flow::Continue),
            Command::Exit => return Ok(Flow::Stop),
            Command::Help => Ok(format_help().to_string()),
            Command::List => Ok(format_list(&self.service.list_all())),
            Command::Add(text) => self.service.add(&text).map(|todo| format_added(&todo)),
            Command::Complete(id) => self
                .service
                .complete(id)
                .map(|todo| format_completed(&todo)),
            Command::Update(id, text) => self
                .service
                .update(id, &text)
                .map(|todo| format_updated(&todo)),
            Command::Delete(id) => self.service.delete(id).map(|todo| format_deleted(&todo)),
        };

        match rendered {
            Ok(message) => writeln!(output, "{message}")?,
            Err(err) => writeln!(output, "{}", format_error(err))?,
        }
        Ok(Flow::Continue)
    }
}

/// Title line with the core version, then a rule.
pub(crate) fn write_banner(mut output: impl Write) -> io::Result<()> {
    writeln!(output, "{BANNER} v{}", core_version())?;
    writeln!(output, "{}", "-".repeat(40))
}

/// Completion summary and goodbye, printed whenever a loop ends normally.
pub(crate) fn write_farewell<R: TodoRepository>(
    service: &TodoService<R>,
    mut output: impl Write,
) -> io::Result<()> {
    let summary = service.completion_summary();
    writeln!(output, "{}", format_summary(summary))?;
    writeln!(output, "Goodbye!")?;
    info!(
        "event=session_end module=cli status=ok completed={} total={}",
        summary.completed, summary.total
    );
    Ok(())
}
