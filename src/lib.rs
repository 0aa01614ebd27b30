//! # XIV Translation Cleaner
//!
//! Deletes translation data files from a game installation's `exd/` folder.
//!
//! - **Settings**: a bundled JSON document names the suggested game folder
//!   and the entries to delete; a file on disk can replace it
//! - **Best-effort deletion**: every entry is attempted once, failures are
//!   reported and never stop the run
//! - **Confirm first**: the terminal screen and the `clean` command both ask
//!   before anything is removed, and `--dry-run` shows what would go

pub mod cleaner;
pub mod cli;
pub mod common;
pub mod tui;
