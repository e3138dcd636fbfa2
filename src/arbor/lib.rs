//! # Arbor Architecture
//!
//! Arbor is a **UI-agnostic tree registry library**: a list of planted trees
//! (species, planter, location, height, health, photos) that can be listed,
//! searched by planter, viewed, created, edited and deleted. The `arbor`
//! binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, runs the interactive session           │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, generic over the store        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) + Forms (form.rs)            │
//! │  - Business logic and input validation                      │
//! │  - Returns `CmdResult`, no I/O assumptions                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - `TreeStore` trait: find, add, update, remove, search     │
//! │  - InMemoryStore (the registry), SharedStore (mutex handle) │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The registry is memory only
//!
//! Trees live in an [`store::memory::InMemoryStore`] owned by the API value
//! for the lifetime of the process. Nothing is written to disk; a new process
//! starts from the demo trees (or empty, see [`config`]).
//!
//! ## Soft failures
//!
//! An unknown id is not an error anywhere in the store: lookups return `None`
//! and updates/removals do nothing. Commands turn that into a warning message.
//! The only hard errors are invalid form input, config I/O and serialization.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Repository trait and implementations
//! - [`model`]: `Tree`, the health vocabulary and the demo registry
//! - [`form`]: Text input to `Tree` conversion and validation
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing, rendering and the interactive session for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod form;
pub mod model;
pub mod store;
