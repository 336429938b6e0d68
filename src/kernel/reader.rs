//! Command reader: one command at a time from any key stream.
//!
//! A command is an optional leading parameter (`+`, `-`, a signed number,
//! `>`, `<` or `@n`), a key sequence resolved by the prefix dispatcher, and
//! as many delimited trailing parameters as the command takes.

use std::fmt;
use std::io;

use crate::core::event::{byte_to_char, CR, KEY_RESIZE, LF};
use crate::core::{Command, KeyEvent, LeadParam, TParObject, TparDelimiter};

use super::code::{CodeId, Instruction};
use super::dispatch::{Dispatch, PrefixDispatcher};
use super::keymap::Keymap;
use super::services::ports::KeySource;

const MAX_COUNT: i32 = 1_000_000;

#[derive(Debug)]
pub enum ReadError {
    Io(io::Error),
    IllegalLeadParam(Command),
    UnterminatedParameter,
    BadDelimiter(u8),
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::Io(e) => write!(f, "Input error: {}", e),
            ReadError::IllegalLeadParam(command) => {
                write!(f, "Illegal leading parameter for {}", command.name())
            }
            ReadError::UnterminatedParameter => write!(f, "Unterminated trailing parameter"),
            ReadError::BadDelimiter(b) => {
                write!(f, "Illegal parameter delimiter {:?}", byte_to_char(*b))
            }
        }
    }
}

impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReadError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ReadError {
    fn from(value: io::Error) -> Self {
        ReadError::Io(value)
    }
}

#[derive(Debug)]
pub enum ReadOutcome {
    Instruction(Instruction),
    /// The command introducer was typed.
    Introducer,
    /// The terminal changed size.
    Resize,
    /// A key with a compiled body.
    Code(CodeId),
    EndOfInput,
}

#[derive(Debug, Clone, Copy)]
pub struct CommandReader {
    skip_blanks: bool,
    introducer: Option<u8>,
}

impl CommandReader {
    /// Reader for scripts and batch input: blanks separate commands.
    pub fn batch() -> Self {
        Self {
            skip_blanks: true,
            introducer: None,
        }
    }

    /// Reader for the keyboard: every key counts, `introducer` opens the
    /// command line and compiled key bodies are honoured.
    pub fn interactive(introducer: u8) -> Self {
        Self {
            skip_blanks: false,
            introducer: Some(introducer),
        }
    }

    pub fn read(
        &self,
        keymap: &Keymap,
        keys: &mut dyn KeySource,
    ) -> Result<ReadOutcome, ReadError> {
        let Some(first) = self.next_significant(keys)? else {
            return Ok(ReadOutcome::EndOfInput);
        };
        if first.code == KEY_RESIZE {
            return Ok(ReadOutcome::Resize);
        }
        if self.introducer.is_some() && first.as_byte() == self.introducer {
            return Ok(ReadOutcome::Introducer);
        }

        let Some((lead, count, mut key)) = read_lead(first, keys)? else {
            return Ok(ReadOutcome::EndOfInput);
        };

        let binding = keymap.lookup(key.code);
        if self.introducer.is_some() && lead == LeadParam::None {
            if let Some(id) = binding.and_then(|b| b.code) {
                return Ok(ReadOutcome::Code(id));
            }
        }
        let bound_tpar = binding.and_then(|b| b.tpar.clone());

        let mut dispatcher = PrefixDispatcher::new();
        let mut prefixed = false;
        let command = loop {
            match dispatcher.feed(keymap, key.code) {
                Dispatch::Command(command) => break command,
                Dispatch::Pending(_) => {
                    prefixed = true;
                    match keys.next_key()? {
                        Some(next) => key = next,
                        None => return Ok(ReadOutcome::EndOfInput),
                    }
                }
            }
        };

        let instruction = Instruction::new(command).with_lead(lead, count);
        if command == Command::NoSuch || command.is_prefix() {
            return Ok(ReadOutcome::Instruction(instruction));
        }
        let attrib = command.attrib();
        if !attrib.lead.permits(lead) {
            return Err(ReadError::IllegalLeadParam(command));
        }
        if attrib.tpar_count == 0 {
            return Ok(ReadOutcome::Instruction(instruction));
        }
        let tpar = match bound_tpar.filter(|_| !prefixed) {
            Some(tpar) => tpar,
            None => self.read_tpars(keys, attrib.tpar_count)?,
        };
        Ok(ReadOutcome::Instruction(instruction.with_tpar(tpar)))
    }

    fn next_significant(&self, keys: &mut dyn KeySource) -> io::Result<Option<KeyEvent>> {
        loop {
            match keys.next_key()? {
                Some(key) if self.skip_blanks && key.is_blank() => continue,
                other => return Ok(other),
            }
        }
    }

    fn read_tpars(&self, keys: &mut dyn KeySource, count: u8) -> Result<TParObject, ReadError> {
        let dlm = loop {
            let key = self
                .next_significant(keys)?
                .ok_or(ReadError::UnterminatedParameter)?;
            if let Some(b) = key.as_byte() {
                break b;
            }
        };
        let kind = TparDelimiter::from_byte(dlm).ok_or(ReadError::BadDelimiter(dlm))?;

        let mut params = Vec::with_capacity(count as usize);
        for _ in 0..count {
            params.push(read_delimited(keys, dlm, kind)?);
        }
        let mut chain: Option<TParObject> = None;
        for mut param in params.into_iter().rev() {
            param.nxt = chain.map(Box::new);
            chain = Some(param);
        }
        chain.ok_or(ReadError::UnterminatedParameter)
    }
}

/// Parses a leading parameter starting at `first`. Returns the lead, its
/// count and the first key of the command proper.
fn read_lead(
    first: KeyEvent,
    keys: &mut dyn KeySource,
) -> Result<Option<(LeadParam, i32, KeyEvent)>, ReadError> {
    let sign = match first.as_byte() {
        Some(b'>') => return next_or_end(keys, LeadParam::Pindef, 0),
        Some(b'<') => return next_or_end(keys, LeadParam::Nindef, 0),
        Some(b'@') => {
            let Some(key) = keys.next_key()? else {
                return Ok(None);
            };
            return match key.as_byte().filter(u8::is_ascii_digit) {
                Some(d) => next_or_end(keys, LeadParam::Marker, i32::from(d - b'0')),
                None => Ok(Some((LeadParam::None, 1, key))),
            };
        }
        Some(b'+') => Some(1),
        Some(b'-') => Some(-1),
        _ => None,
    };

    let mut key = if sign.is_some() {
        match keys.next_key()? {
            Some(key) => key,
            None => return Ok(None),
        }
    } else {
        first
    };

    let mut digits: Option<i32> = None;
    while let Some(d) = key.as_byte().filter(u8::is_ascii_digit) {
        let value = digits.unwrap_or(0);
        digits = Some((value * 10 + i32::from(d - b'0')).min(MAX_COUNT));
        key = match keys.next_key()? {
            Some(key) => key,
            None => return Ok(None),
        };
    }

    let lead = match (sign, digits) {
        (None, None) => (LeadParam::None, 1),
        (Some(1), None) => (LeadParam::Plus, 1),
        (Some(_), None) => (LeadParam::Minus, -1),
        (Some(-1), Some(n)) => (LeadParam::Nint, -n),
        (_, Some(n)) => (LeadParam::Pint, n),
    };
    Ok(Some((lead.0, lead.1, key)))
}

fn next_or_end(
    keys: &mut dyn KeySource,
    lead: LeadParam,
    count: i32,
) -> Result<Option<(LeadParam, i32, KeyEvent)>, ReadError> {
    Ok(keys.next_key()?.map(|key| (lead, count, key)))
}

/// Reads text up to the closing `dlm`. Line ends start a continuation line.
fn read_delimited(
    keys: &mut dyn KeySource,
    dlm: u8,
    kind: TparDelimiter,
) -> Result<TParObject, ReadError> {
    let mut lines = vec![String::new()];
    loop {
        let key = keys.next_key()?.ok_or(ReadError::UnterminatedParameter)?;
        let Some(b) = key.as_byte() else {
            continue;
        };
        if b == dlm {
            break;
        }
        match b {
            CR | LF => lines.push(String::new()),
            _ => {
                if let Some(line) = lines.last_mut() {
                    line.push(byte_to_char(b));
                }
            }
        }
    }

    let mut con: Option<TParObject> = None;
    for text in lines.into_iter().rev() {
        let mut part = TParObject::new(kind, text);
        part.con = con.map(Box::new);
        con = Some(part);
    }
    con.ok_or(ReadError::UnterminatedParameter)
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/reader.rs"]
mod tests;
