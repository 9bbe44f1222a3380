//! # Shelf Architecture
//!
//! Shelf is a **UI-agnostic inventory library** with a CLI client. The
//! layering keeps every piece testable on its own:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, renders tables, prints messages        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (positions → item ids)                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic, returns structured CmdResult values      │
//! │  - No I/O assumptions beyond the store it is handed         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core + Storage (inventory.rs, store/)                      │
//! │  - Inventory<S>: the ordered collection, saved after every  │
//! │    mutation                                                 │
//! │  - DataStore trait: FileStore (prod), InMemoryStore (tests) │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Items are addressed in the UI by 1-based position in the full
//! collection, but every item carries a stable id and all mutations key on
//! it, so "delete row 2" can never hit the wrong one of two identical rows.
//!
//! From `api.rs` inward, code takes plain Rust arguments, returns
//! `Result<CmdResult>`, and never writes to stdout/stderr or calls
//! `std::process::exit`. The same core could sit behind a TUI or a web UI.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`inventory`]: The core collection
//! - [`store`]: Storage abstraction and implementations
//! - [`filter`]: Pure view computation (search + category)
//! - [`csv`]: CSV export codec (forward-only, no parse path)
//! - [`model`]: Core data types (`Item`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod csv;
pub mod error;
pub mod filter;
pub mod inventory;
pub mod model;
pub mod store;
