//! tally - personal task ledger
//!
//! Work items are persisted as line-delimited JSON records in a per-user
//! file (`~/.tally/tasks.json` by default). The CLI appends, lists,
//! closes, removes, and reports on those records; targeted mutations
//! resolve a task through unique ID prefix matching.
//!
//! # Module Organization
//!
//! - `cli`: command-line interface using clap
//! - `config`: ledger directory and `config.toml` resolution
//! - `error`: error types and result aliases
//! - `id`: task ID generation
//! - `matcher`: ID prefix resolution
//! - `output`: table and timestamp rendering
//! - `store`: the line-delimited JSON store
//! - `task`: the task record and its wire format
//!
//! The store file is never locked: exactly one process is assumed to touch
//! the ledger at a time. Interleaved appends are independent writes, but a
//! close or remove rewrite racing any other writer can drop or duplicate
//! records.

pub mod cli;
pub mod config;
pub mod error;
pub mod id;
pub mod matcher;
pub mod output;
pub mod store;
pub mod task;

pub use error::{Error, Result};
