//! Keymap: primary lookup (key → command) and the expanded keymap
//! ((prefix, continuation) → command).

mod tables;

use crate::core::event::{self, KeyCode, KEY_TABLE_LEN};
use crate::core::{Command, Prefix, TParObject};

use super::code::CodeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    Old,
    #[default]
    New,
}

impl Dialect {
    pub fn from_old_flag(old_cmds: Option<bool>) -> Self {
        match old_cmds {
            Some(true) => Dialect::Old,
            _ => Dialect::New,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    pub command: Command,
    /// Compiled body run instead of `command`.
    pub code: Option<CodeId>,
    /// Trailing parameter supplied instead of reading one.
    pub tpar: Option<TParObject>,
}

impl KeyBinding {
    fn command(command: Command) -> Self {
        Self {
            command,
            code: None,
            tpar: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpEntry {
    pub ch: u8,
    pub command: Command,
}

/// Continuation char of the trailing sentinel section.
pub const SENTINEL_CH: u8 = b'?';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keymap {
    dialect: Dialect,
    lookup: Vec<KeyBinding>,
    expanded: Vec<ExpEntry>,
    prefix_pointer: [usize; Prefix::COUNT],
    section_end: [usize; Prefix::COUNT],
}

impl Keymap {
    /// Builds both tables for `dialect`. Every key code ends up bound.
    pub fn load(dialect: Dialect) -> Self {
        let (primary, sections) = match dialect {
            Dialect::Old => (tables::OLD_PRIMARY, tables::OLD_SECTIONS),
            Dialect::New => (tables::NEW_PRIMARY, tables::NEW_SECTIONS),
        };

        let mut lookup = vec![KeyBinding::command(Command::Noop); KEY_TABLE_LEN];
        let mut bind = |code: KeyCode, command: Command| {
            if let Some(idx) = event::key_index(code) {
                lookup[idx] = KeyBinding::command(command);
            }
        };
        for &(code, command) in tables::SPECIAL_KEYS {
            bind(code, command);
        }
        for &(b, command) in tables::CONTROL_KEYS.iter().chain(primary) {
            bind(b as KeyCode, command);
            if b.is_ascii_uppercase() {
                bind(b.to_ascii_lowercase() as KeyCode, command);
            }
        }

        let mut expanded = Vec::with_capacity(256);
        let mut prefix_pointer = [0; Prefix::COUNT];
        for prefix in Prefix::ALL {
            prefix_pointer[prefix.index()] = expanded.len();
            let entries = sections
                .iter()
                .find(|(p, _)| *p == prefix)
                .map(|(_, entries)| *entries)
                .unwrap_or(&[]);
            expanded.extend(entries.iter().map(|&(ch, command)| ExpEntry {
                ch: ch.to_ascii_uppercase(),
                command,
            }));
        }
        let sentinel = expanded.len();
        expanded.push(ExpEntry {
            ch: SENTINEL_CH,
            command: Command::NoSuch,
        });

        let mut section_end = [sentinel; Prefix::COUNT];
        for (i, prefix) in Prefix::ALL.iter().enumerate() {
            if let Some(next) = Prefix::ALL.get(i + 1) {
                section_end[prefix.index()] = prefix_pointer[next.index()];
            }
        }

        Self {
            dialect,
            lookup,
            expanded,
            prefix_pointer,
            section_end,
        }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn lookup(&self, code: KeyCode) -> Option<&KeyBinding> {
        event::key_index(code).map(|idx| &self.lookup[idx])
    }

    /// Command bound to `code`; out-of-range codes are unbound.
    pub fn command_for(&self, code: KeyCode) -> Command {
        self.lookup(code)
            .map(|binding| binding.command)
            .unwrap_or(Command::NoSuch)
    }

    /// Scans the section of `prefix` for `ch`. First match wins.
    pub fn lookup_exp(&self, prefix: Prefix, ch: u8) -> Command {
        let ch = ch.to_ascii_uppercase();
        self.section(prefix)
            .iter()
            .find(|entry| entry.ch == ch)
            .map(|entry| entry.command)
            .unwrap_or(Command::NoSuch)
    }

    pub fn section(&self, prefix: Prefix) -> &[ExpEntry] {
        let start = self.prefix_pointer[prefix.index()];
        let end = self.section_end[prefix.index()];
        &self.expanded[start..end]
    }

    pub fn prefix_pointer(&self, prefix: Prefix) -> usize {
        self.prefix_pointer[prefix.index()]
    }

    pub fn expanded(&self) -> &[ExpEntry] {
        &self.expanded
    }

    /// Attaches a compiled body to a byte key. Special keys carry no code.
    pub(crate) fn bind_code(&mut self, code: KeyCode, body: CodeId) -> bool {
        if code < 0 {
            return false;
        }
        match event::key_index(code) {
            Some(idx) => {
                self.lookup[idx].code = Some(body);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/keymap.rs"]
mod tests;
