use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::kernel::frame::DEFAULT_SPACE;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_introducer")]
    pub command_introducer: char,
    #[serde(default = "default_space")]
    pub default_space: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_file: Option<String>,
    /// Indexed help file read by the help command.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_file: Option<PathBuf>,
    #[serde(default)]
    pub keys: Vec<KeyRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

/// A key bound to a command string, compiled at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyRule {
    pub key: String,
    pub commands: String,
}

fn default_introducer() -> char {
    '\\'
}

fn default_space() -> usize {
    DEFAULT_SPACE
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            command_introducer: default_introducer(),
            default_space: default_space(),
            initial_file: None,
            help_file: None,
            keys: Vec::new(),
            log_filter: None,
        }
    }
}

impl Settings {
    /// Introducer as a key byte; non 8-bit characters fall back to `\`.
    pub fn introducer_byte(&self) -> u8 {
        u8::try_from(u32::from(self.command_introducer)).unwrap_or(b'\\')
    }
}
