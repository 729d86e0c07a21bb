//! Core use-case services.
//!
//! # Responsibility
//! - Enforce title rules and existence checks above the repository.
//! - Keep CLI callers decoupled from storage details.

pub mod todo_service;
