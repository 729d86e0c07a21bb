//! Line input shared by the interactive front ends.
//!
//! # Invariants
//! - A line that is not valid UTF-8 is reported as `NotUtf8` and consumed;
//!   it never ends the session. Only real read failures are `Err`.

use std::io::{self, BufRead};

/// One read attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputLine {
    /// Line text without its `\n` / `\r\n` terminator.
    Text(String),
    NotUtf8,
    Eof,
}

pub const NOT_UTF8_MESSAGE: &str = "input is not valid UTF-8";

/// Byte-level line reader over any `BufRead`.
pub struct LineReader<B> {
    input: B,
    buf: Vec<u8>,
}

impl<B: BufRead> LineReader<B> {
    pub fn new(input: B) -> Self {
        Self {
            input,
            buf: Vec::new(),
        }
    }

    /// Reads the next line.
    ///
    /// # Errors
    /// Returns I/O errors from the underlying reader.
    pub fn next_line(&mut self) -> io::Result<InputLine> {
        self.buf.clear();
        if self.input.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(InputLine::Eof);
        }
        if self.buf.ends_with(b"\n") {
            self.buf.pop();
            if self.buf.ends_with(b"\r") {
                self.buf.pop();
            }
        }
        match std::str::from_utf8(&self.buf) {
            Ok(text) => Ok(InputLine::Text(text.to_string())),
            Err(_) => Ok(InputLine::NotUtf8),
        }
    }
}
