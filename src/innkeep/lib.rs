//! # Innkeep Architecture
//!
//! Innkeep is a **UI-agnostic boarding-house management library** with a CLI
//! client. The library owns the data; the CLI only parses arguments,
//! validates input and renders results.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses and validates arguments, formats terminal output  │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Composition root: opens the three repositories once      │
//! │  - Dispatches to repositories and the occupancy coordinator │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Repository Layer (repo/, occupancy.rs)                     │
//! │  - In-memory record lists, full-file rewrite per mutation   │
//! │  - Rollback of the in-memory change on a failed save        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/, codec.rs)                           │
//! │  - StorageBackend trait: FsBackend (prod), MemBackend (test)│
//! │  - One delimited text line per record                       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular arguments, returns regular
//! `Result` types, and **never** touches stdout/stderr or exits the
//! process. The same core could sit behind a desktop UI or a web service.
//!
//! ## Consistency Model
//!
//! Every mutation rewrites one entity's whole file through a temp file, a
//! `.bak` copy and an atomic rename, and rolls back its in-memory change if
//! that write fails. There is no transaction across entities: the
//! tenant/room coordination in [`occupancy`] is two sequential saves, and a
//! failure between them leaves the files inconsistent (documented there).
//!
//! ## Module Overview
//!
//! - [`api`]: the facade, entry point for all operations
//! - [`model`]: record types and their enums
//! - [`codec`]: delimited line format per entity
//! - [`store`]: storage backends
//! - [`repo`]: per-entity repositories and load diagnostics
//! - [`occupancy`]: tenant/room cross-entity coordination
//! - [`dashboard`]: derived counts and monthly aggregation
//! - [`config`]: presentation preferences (config.json)
//! - [`archive`]: tar.gz export/import of the data files
//! - [`error`]: error types

pub mod api;
pub mod archive;
pub mod codec;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod model;
pub mod occupancy;
pub mod repo;
pub mod store;
