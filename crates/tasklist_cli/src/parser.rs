//! Command-line parsing for the interactive session.
//!
//! # Responsibility
//! - Split raw input into a case-insensitive command word and its arguments.
//! - Turn id arguments into positive `TodoId` values.
//!
//! # Invariants
//! - Unknown commands and malformed ids are rejected here and never reach
//!   the service.
//! - Title arguments are passed through trimmed; title rules stay in core.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::num::IntErrorKind;
use tasklist_core::TodoId;

pub const ADD_USAGE: &str = "add <text>";
pub const COMPLETE_USAGE: &str = "complete <id>";
pub const UPDATE_USAGE: &str = "update <id> <text>";
pub const DELETE_USAGE: &str = "delete <id>";

/// Lower-cased command word plus the untouched remainder of the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine<'a> {
    pub command: String,
    pub args: &'a str,
}

/// Splits one input line at the first whitespace run.
///
/// Blank input yields an empty command and empty args.
pub fn split_line(line: &str) -> ParsedLine<'_> {
    let trimmed = line.trim();
    let (command, args) = match trimmed.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim_start()),
        None => (trimmed, ""),
    };
    ParsedLine {
        command: command.to_lowercase(),
        args,
    }
}

/// Parses a positive integer id; `None` for zero, negatives, or non-numbers.
pub fn parse_id(raw: &str) -> Option<TodoId> {
    raw.trim().parse::<TodoId>().ok().filter(|id| *id >= 1)
}

/// One user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Add(String),
    Complete(TodoId),
    Update(TodoId, String),
    Delete(TodoId),
    Help,
    Exit,
    /// Blank line; the session just prompts again.
    Empty,
}

/// Input the session cannot turn into a `Command`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Unknown(String),
    MissingArgument { usage: &'static str },
    InvalidId(String),
    /// Well-formed id too large to have ever been assigned.
    UnassignedId(String),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown(command) => write!(
                f,
                "unknown command '{command}'. Type 'help' for available commands"
            ),
            Self::MissingArgument { usage } => write!(f, "usage: {usage}"),
            Self::InvalidId(raw) => {
                write!(f, "invalid ID '{raw}'. Please provide a positive number")
            }
            Self::UnassignedId(raw) => write!(f, "todo with ID {raw} not found"),
        }
    }
}

impl Error for ParseError {}

impl Command {
    /// Parses one full input line.
    ///
    /// # Errors
    /// - `Unknown` for unrecognized command words.
    /// - `MissingArgument` when required text or ids are absent.
    /// - `InvalidId` when an id is not a positive integer.
    /// - `UnassignedId` when an id is numeric but beyond the `TodoId` range.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let ParsedLine { command, args } = split_line(line);
        match command.as_str() {
            "" => Ok(Self::Empty),
            "list" => Ok(Self::List),
            "help" => Ok(Self::Help),
            "exit" | "quit" => Ok(Self::Exit),
            "add" => Ok(Self::Add(required_text(args, ADD_USAGE)?)),
            "complete" => Ok(Self::Complete(required_id(args, COMPLETE_USAGE)?)),
            "delete" => Ok(Self::Delete(required_id(args, DELETE_USAGE)?)),
            "update" => {
                let (raw_id, text) = args.split_once(char::is_whitespace).unwrap_or((args, ""));
                let id = required_id(raw_id, UPDATE_USAGE)?;
                Ok(Self::Update(id, required_text(text, UPDATE_USAGE)?))
            }
            _ => Err(ParseError::Unknown(command)),
        }
    }
}

fn required_text(args: &str, usage: &'static str) -> Result<String, ParseError> {
    let text = args.trim();
    if text.is_empty() {
        return Err(ParseError::MissingArgument { usage });
    }
    Ok(text.to_string())
}

fn required_id(args: &str, usage: &'static str) -> Result<TodoId, ParseError> {
    let raw = args.trim();
    if raw.is_empty() {
        return Err(ParseError::MissingArgument { usage });
    }
    match raw.parse::<TodoId>() {
        Ok(id) if id >= 1 => Ok(id),
        Err(err) if *err.kind() == IntErrorKind::PosOverflow => {
            Err(ParseError::UnassignedId(raw.to_string()))
        }
        _ => Err(ParseError::InvalidId(raw.to_string())),
    }
}
