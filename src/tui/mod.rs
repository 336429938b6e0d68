//! Terminal frontend (crossterm + ratatui).
//!
//! Kept apart from `kernel` so the dispatch core builds and tests without
//! terminal crates.

pub mod crossterm;
pub mod screen;
pub mod terminal_guard;

pub use screen::CrosstermTerminal;
