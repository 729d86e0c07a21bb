//! Interactive command-line front end for `tasklist_core`.
//!
//! # Responsibility
//! - Parse typed commands, call the core service, and render results.
//! - Keep all I/O at this layer; the core never prints.

pub mod config;
pub mod formatter;
pub mod input;
pub mod menu;
pub mod parser;
pub mod session;
