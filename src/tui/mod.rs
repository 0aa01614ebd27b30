//! Full-screen terminal front end.
//!
//! Split Elm-style into `model` (state), `update` (pure transitions),
//! `render` (drawing) and `runtime` (terminal I/O and command execution).

pub mod model;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod update;

pub use runtime::run_tui;
