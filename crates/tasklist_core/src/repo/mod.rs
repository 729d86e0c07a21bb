//! Repository layer: record storage behind a CRUD contract.
//!
//! # Responsibility
//! - Define the storage contract consumed by the service layer.
//! - Keep id assignment and ordering inside the store.
//!
//! # Invariants
//! - Repositories never raise business errors; absence is `None`/`false`.

pub mod todo_store;
