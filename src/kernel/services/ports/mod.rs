//! Service ports: traits + data contracts.

pub mod keys;
pub mod settings;
pub mod terminal;

pub use keys::{KeySource, StringKeys};
pub use settings::{KeyRule, Settings};
pub use terminal::{NullTerminal, ScreenView, Terminal};
