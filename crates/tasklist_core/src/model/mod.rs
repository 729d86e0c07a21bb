//! Task list domain model.
//!
//! # Responsibility
//! - Define the record shape used by the store and service layers.
//!
//! # Invariants
//! - Every record is identified by a positive, never-reused `TodoId`.
//! - Records are immutable values; updates produce replacements.

pub mod todo;
