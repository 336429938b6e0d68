//! Key codes as seen by the keymap.
//!
//! Bytes occupy `0..=ORD_MAX_CHAR`; terminal keys with no byte encoding get
//! negative codes down to `-MAX_SPECIAL_KEYS`.

use bitflags::bitflags;

pub type KeyCode = i16;

pub const ORD_MAX_CHAR: KeyCode = 255;
pub const MAX_SPECIAL_KEYS: KeyCode = 37;

pub const KEY_UP: KeyCode = -1;
pub const KEY_DOWN: KeyCode = -2;
pub const KEY_LEFT: KeyCode = -3;
pub const KEY_RIGHT: KeyCode = -4;
pub const KEY_HOME: KeyCode = -5;
pub const KEY_END: KeyCode = -6;
pub const KEY_PAGE_UP: KeyCode = -7;
pub const KEY_PAGE_DOWN: KeyCode = -8;
pub const KEY_INSERT: KeyCode = -9;
pub const KEY_DELETE: KeyCode = -10;
pub const KEY_BACK_TAB: KeyCode = -11;
pub const KEY_BACKSPACE: KeyCode = -12;
pub const KEY_RESIZE: KeyCode = -13;
pub const KEY_F1: KeyCode = -14;
pub const MAX_FUNCTION_KEYS: u8 = 24;

pub const CR: u8 = 13;
pub const LF: u8 = 10;
pub const TAB: u8 = 9;
pub const BS: u8 = 8;
pub const DEL: u8 = 127;
pub const CTRL_C: u8 = 3;

/// Code of function key `n` (1-based), if within the supported range.
pub fn function_key(n: u8) -> Option<KeyCode> {
    if n == 0 || n > MAX_FUNCTION_KEYS {
        return None;
    }
    Some(KEY_F1 - (n as KeyCode - 1))
}

/// Every valid key code, special keys first.
pub fn all_key_codes() -> impl Iterator<Item = KeyCode> {
    -MAX_SPECIAL_KEYS..=ORD_MAX_CHAR
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct KeyModifiers: u8 {
        const SHIFT = 0b0001;
        const CONTROL = 0b0010;
        const ALT = 0b0100;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyEvent {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn byte(b: u8) -> Self {
        Self::new(b as KeyCode, KeyModifiers::empty())
    }

    pub fn special(code: KeyCode) -> Self {
        debug_assert!(code < 0);
        Self::new(code, KeyModifiers::empty())
    }

    pub fn is_special(&self) -> bool {
        self.code < 0
    }

    pub fn as_byte(&self) -> Option<u8> {
        u8::try_from(self.code).ok()
    }

    pub fn is_blank(&self) -> bool {
        matches!(self.as_byte(), Some(b' ' | TAB | CR | LF))
    }
}

/// Latin-1 byte of `ch`; characters outside the 8-bit set become `?`.
pub fn char_to_byte(ch: char) -> u8 {
    u8::try_from(u32::from(ch)).unwrap_or(b'?')
}

pub fn byte_to_char(b: u8) -> char {
    char::from(b)
}

/// Table index of a key code: specials first, then bytes.
#[inline]
pub fn key_index(code: KeyCode) -> Option<usize> {
    if (-MAX_SPECIAL_KEYS..=ORD_MAX_CHAR).contains(&code) {
        Some((code + MAX_SPECIAL_KEYS) as usize)
    } else {
        None
    }
}

pub const KEY_TABLE_LEN: usize = (MAX_SPECIAL_KEYS + ORD_MAX_CHAR + 1) as usize;

#[cfg(test)]
#[path = "../../tests/unit/core/event.rs"]
mod tests;
