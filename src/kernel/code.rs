//! Compiled command bodies.
//!
//! A body is a list of instructions produced by reading a string with the
//! command reader. Bodies are stored in an arena addressed by `CodeId`; slot
//! 0 is a permanent empty header so a valid id is never zero.

use crate::core::{Command, LeadParam, TParObject};

use super::keymap::Keymap;
use super::reader::{CommandReader, ReadError, ReadOutcome};
use super::services::ports::StringKeys;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodeId(usize);

impl CodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    pub command: Command,
    pub lead: LeadParam,
    pub count: i32,
    pub tpar: Option<TParObject>,
}

impl Instruction {
    pub fn new(command: Command) -> Self {
        Self {
            command,
            lead: LeadParam::None,
            count: 1,
            tpar: None,
        }
    }

    pub fn with_lead(mut self, lead: LeadParam, count: i32) -> Self {
        self.lead = lead;
        self.count = count;
        self
    }

    pub fn with_tpar(mut self, tpar: TParObject) -> Self {
        self.tpar = Some(tpar);
        self
    }
}

#[derive(Debug, Clone)]
pub struct CodeArena {
    nodes: Vec<Option<Vec<Instruction>>>,
    free: Vec<usize>,
}

impl Default for CodeArena {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeArena {
    pub fn new() -> Self {
        Self {
            nodes: vec![Some(Vec::new())],
            free: Vec::new(),
        }
    }

    pub fn insert(&mut self, body: Vec<Instruction>) -> CodeId {
        match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = Some(body);
                CodeId(slot)
            }
            None => {
                self.nodes.push(Some(body));
                CodeId(self.nodes.len() - 1)
            }
        }
    }

    pub fn get(&self, id: CodeId) -> Option<&[Instruction]> {
        if id.0 == 0 {
            return None;
        }
        self.nodes.get(id.0)?.as_deref()
    }

    /// Frees a body; the header and already freed ids are refused.
    pub fn release(&mut self, id: CodeId) -> bool {
        if id.0 == 0 {
            return false;
        }
        match self.nodes.get_mut(id.0) {
            Some(slot @ Some(_)) => {
                *slot = None;
                self.free.push(id.0);
                true
            }
            _ => false,
        }
    }

    /// Live bodies, not counting the header.
    pub fn len(&self) -> usize {
        self.nodes.iter().skip(1).filter(|n| n.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Reads every command in `text`. Blanks between commands are ignored.
pub fn compile(keymap: &Keymap, text: &str) -> Result<Vec<Instruction>, ReadError> {
    let reader = CommandReader::batch();
    let mut keys = StringKeys::new(text);
    let mut body = Vec::new();
    loop {
        match reader.read(keymap, &mut keys)? {
            ReadOutcome::Instruction(instruction) => body.push(instruction),
            ReadOutcome::EndOfInput => break,
            ReadOutcome::Introducer | ReadOutcome::Resize | ReadOutcome::Code(_) => {}
        }
    }
    Ok(body)
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/code.rs"]
mod tests;
