use std::io;
use std::time::Duration;

use crossterm::event::{self as ct, Event, KeyEventKind};

use crate::core::event::{
    self, char_to_byte, KeyEvent, KeyModifiers, CR, CTRL_C, KEY_RESIZE, TAB,
};
use crate::kernel::mode::AbortFlag;
use crate::kernel::services::ports::KeySource;

const ESC: u8 = 27;
const POLL_INTERVAL: Duration = Duration::from_millis(200);

/// Maps a terminal key event onto a key code. Release events and keys with
/// no code yield `None`.
pub fn into_key_event(event: ct::KeyEvent) -> Option<KeyEvent> {
    if event.kind == KeyEventKind::Release {
        return None;
    }
    let modifiers = into_key_modifiers(event.modifiers);
    let code = match event.code {
        ct::KeyCode::Char(ch) if modifiers.contains(KeyModifiers::CONTROL) && ch.is_ascii() => {
            (ch.to_ascii_uppercase() as u8 & 0x1f) as event::KeyCode
        }
        ct::KeyCode::Char(ch) => char_to_byte(ch) as event::KeyCode,
        ct::KeyCode::Enter => CR as event::KeyCode,
        ct::KeyCode::Tab => TAB as event::KeyCode,
        ct::KeyCode::Esc => ESC as event::KeyCode,
        ct::KeyCode::Null => 0,
        ct::KeyCode::Backspace => event::KEY_BACKSPACE,
        ct::KeyCode::Delete => event::KEY_DELETE,
        ct::KeyCode::Insert => event::KEY_INSERT,
        ct::KeyCode::BackTab => event::KEY_BACK_TAB,
        ct::KeyCode::Up => event::KEY_UP,
        ct::KeyCode::Down => event::KEY_DOWN,
        ct::KeyCode::Left => event::KEY_LEFT,
        ct::KeyCode::Right => event::KEY_RIGHT,
        ct::KeyCode::Home => event::KEY_HOME,
        ct::KeyCode::End => event::KEY_END,
        ct::KeyCode::PageUp => event::KEY_PAGE_UP,
        ct::KeyCode::PageDown => event::KEY_PAGE_DOWN,
        ct::KeyCode::F(n) => event::function_key(n)?,
        _ => return None,
    };
    Some(KeyEvent::new(code, modifiers))
}

fn into_key_modifiers(mods: ct::KeyModifiers) -> KeyModifiers {
    let mut out = KeyModifiers::empty();
    if mods.contains(ct::KeyModifiers::SHIFT) {
        out |= KeyModifiers::SHIFT;
    }
    if mods.contains(ct::KeyModifiers::CONTROL) {
        out |= KeyModifiers::CONTROL;
    }
    if mods.contains(ct::KeyModifiers::ALT) {
        out |= KeyModifiers::ALT;
    }
    out
}

/// Keyboard input in raw mode. Ctrl-C raises the control-c flag as well as
/// arriving as a key; a raised hangup flag ends input.
pub struct CrosstermKeys {
    control_c: AbortFlag,
    hangup: AbortFlag,
}

impl CrosstermKeys {
    pub fn new(control_c: AbortFlag, hangup: AbortFlag) -> Self {
        Self { control_c, hangup }
    }
}

impl KeySource for CrosstermKeys {
    fn next_key(&mut self) -> io::Result<Option<KeyEvent>> {
        loop {
            if self.hangup.is_set() {
                return Ok(None);
            }
            if !ct::poll(POLL_INTERVAL)? {
                continue;
            }
            match ct::read()? {
                Event::Key(key) => {
                    let Some(key) = into_key_event(key) else {
                        continue;
                    };
                    if key.as_byte() == Some(CTRL_C) {
                        self.control_c.set();
                    }
                    return Ok(Some(key));
                }
                Event::Resize(_, _) => return Ok(Some(KeyEvent::special(KEY_RESIZE))),
                _ => continue,
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/crossterm.rs"]
mod tests;
