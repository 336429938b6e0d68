use std::collections::VecDeque;
use std::io::{self, BufRead};

use crate::core::event::{char_to_byte, KeyEvent};

/// Where keys come from: the terminal, a script, or a batch stream.
pub trait KeySource {
    /// Blocks for the next key; `None` at end of input.
    fn next_key(&mut self) -> io::Result<Option<KeyEvent>>;
}

/// Keys taken from an in-memory string or event list.
#[derive(Debug, Default, Clone)]
pub struct StringKeys {
    keys: VecDeque<KeyEvent>,
}

impl StringKeys {
    pub fn new(text: &str) -> Self {
        Self {
            keys: text.chars().map(|ch| KeyEvent::byte(char_to_byte(ch))).collect(),
        }
    }

    pub fn from_events(events: impl IntoIterator<Item = KeyEvent>) -> Self {
        Self {
            keys: events.into_iter().collect(),
        }
    }

    pub fn push(&mut self, event: KeyEvent) {
        self.keys.push_back(event);
    }

    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl KeySource for StringKeys {
    fn next_key(&mut self) -> io::Result<Option<KeyEvent>> {
        Ok(self.keys.pop_front())
    }
}

/// Keys read byte by byte from a stream (batch mode stdin).
pub struct StreamKeys<R> {
    reader: R,
}

impl<R: BufRead> StreamKeys<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> KeySource for StreamKeys<R> {
    fn next_key(&mut self) -> io::Result<Option<KeyEvent>> {
        let buf = self.reader.fill_buf()?;
        let Some(&b) = buf.first() else {
            return Ok(None);
        };
        self.reader.consume(1);
        Ok(Some(KeyEvent::byte(b)))
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/keys.rs"]
mod tests;
