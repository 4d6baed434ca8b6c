//! # Shell Behavior
//!
//! This is **one possible UI client** for shelf, not the application itself.
//! The shell is the only place that knows about stdin, stdout, screen
//! clearing and exit codes.
//!
//! ## Menus
//!
//! The session starts at the main menu and every submenu returns to its
//! parent with Back or Exit:
//!
//! ```text
//! Main:     Manage Books | View Books | Settings | Exit
//! Manage:   Add Book | Remove Book | Edit Book | Find Book | Back
//! View:     Next | Previous | <id> Select | Exit
//! Selected: Remove | Edit | Back
//! Settings: Page Size | Color | Wipe Screen | Save | Back
//! ```
//!
//! Options are picked by their first letter. Closing stdin (Ctrl-D, or the
//! end of a piped script) ends the session from whatever menu is open.
//!
//! ## Screen Wiping
//!
//! Between menus the screen is cleared, but only when stdout is a terminal
//! and `clear_screen` is on. Piped sessions therefore produce a plain,
//! append-only transcript.
//!
//! ## Module Structure
//!
//! - `commands`: Process wiring (config, logging, seeding) and `run`
//! - `shell`: The menu loop
//! - `input`: Menu choices parsed from typed text
//! - `print`: Book blocks, messages and page footers
//! - `setup`: Argument parsing via clap

mod commands;
mod input;
mod print;
pub mod setup;
mod shell;

pub use commands::run;
