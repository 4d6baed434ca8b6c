//! # Shelf Binary
//!
//! The binary is intentionally thin: the menu shell lives in `src/shelf/cli/`,
//! while this file only invokes `cli::run()` and handles process termination.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Shell Layer (src/shelf/cli/)                               │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Settings, logging and catalog wiring (commands.rs)       │
//! │  - Menu loop and prompts (shell.rs, input.rs)               │
//! │  - Rendering (print.rs)                                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Typed text → book ids                                    │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Testing Approach
//!
//! - **Catalog (`catalog/`)**: unit tests of ids, search, remove, edit, paging.
//! - **API (`api.rs`)**: message levels and result shapes.
//! - **Shell (`cli/shell.rs`)**: scripted sessions over an in-memory reader
//!   and writer.
//! - **Binary (`tests/`)**: whole sessions piped through the built binary.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
