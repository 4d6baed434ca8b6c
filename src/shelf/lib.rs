//! # Shelf Architecture
//!
//! Shelf is an in-memory book catalog driven from text menus. Like any
//! front-end-agnostic library, the catalog logic knows nothing about the
//! terminal: the menu shell in the binary is just one client of it.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Shell Layer (cli/, wired by main.rs)                       │
//! │  - Menus, prompts, rendering, screen clearing               │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over the catalog                             │
//! │  - Normalizes inputs (typed text → book ids)                │
//! │  - Returns `CmdResult` with leveled messages                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Catalog Layer (catalog/)                                   │
//! │  - Owns every `Book`, assigns and renumbers ids             │
//! │  - Multi-field search, remove, edit, pagination             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Id System
//!
//! Book ids are positional: they always run `1..=count` in insertion order
//! and are recomputed whenever a book is removed. Each book also carries a
//! stable UUID in its metadata for code that must track a book across
//! removals. See [`catalog`] for the full lifecycle.
//!
//! ## Nothing Persists
//!
//! The catalog lives for exactly one process run. Only shell settings
//! ([`config`]) may be written to disk.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`catalog`]: The catalog engine (ids, search, pagination)
//! - [`model`]: `Book` plus the `BookFilter` / `BookUpdate` parameter groups
//! - [`config`]: Shell settings
//! - [`error`]: Error types
//! - `cli`: Menus, prompts and rendering for the binary (not part of the lib API)

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod model;
