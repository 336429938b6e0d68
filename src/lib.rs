//! ludwig - command-driven text editor library
//!
//! Modules:
//! - core: commands, key codes, parameters
//! - kernel: keymap, prefix dispatch, frames, executor, startup/windup, main loop
//! - help: help-index builder
//! - tui: crossterm/ratatui terminal adapter

pub mod core;
pub mod help;
pub mod kernel;
#[cfg(feature = "tui")]
pub mod tui;
