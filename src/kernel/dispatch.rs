//! Prefix chain state machine.
//!
//! Keys are fed one at a time; the dispatcher remembers the pending prefix
//! between keys instead of recursing, so a failed chain is a plain `reset`.

use crate::core::{Command, KeyCode, Prefix};

use super::keymap::Keymap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// A prefix was seen; another key is needed.
    Pending(Prefix),
    /// A leaf command, possibly `NoSuch`.
    Command(Command),
}

#[derive(Debug, Default, Clone)]
pub struct PrefixDispatcher {
    pending: Option<Prefix>,
}

impl PrefixDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Option<Prefix> {
        self.pending
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_none()
    }

    pub fn reset(&mut self) {
        self.pending = None;
    }

    pub fn feed(&mut self, keymap: &Keymap, key: KeyCode) -> Dispatch {
        let command = match self.pending.take() {
            None => keymap.command_for(key),
            Some(prefix) => match u8::try_from(key) {
                Ok(ch) => keymap.lookup_exp(prefix, ch),
                Err(_) => Command::NoSuch,
            },
        };

        match command {
            Command::Prefix(prefix) => {
                self.pending = Some(prefix);
                Dispatch::Pending(prefix)
            }
            other => Dispatch::Command(other),
        }
    }

    /// Runs a whole key sequence; `None` if it ends with a prefix pending.
    pub fn resolve(keymap: &Keymap, keys: &[KeyCode]) -> Option<Command> {
        let mut dispatcher = Self::new();
        let mut last = None;
        for &key in keys {
            match dispatcher.feed(keymap, key) {
                Dispatch::Pending(_) => last = None,
                Dispatch::Command(command) => {
                    last = Some(command);
                    break;
                }
            }
        }
        last
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/dispatch.rs"]
mod tests;
