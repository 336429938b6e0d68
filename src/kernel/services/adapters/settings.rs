use std::path::{Path, PathBuf};

use crate::core::event::{self, KeyCode};
use crate::kernel::services::ports::settings::Settings;

use super::dirs::get_config_dir;

const SETTINGS_FILE: &str = "settings.json";

pub fn get_settings_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join(SETTINGS_FILE))
}

/// Settings from the user's settings file, defaults when absent or unreadable.
pub fn load_settings() -> Settings {
    match get_settings_path() {
        Some(path) if path.exists() => load_settings_from(&path),
        _ => Settings::default(),
    }
}

pub fn load_settings_from(path: &Path) -> Settings {
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(error) => {
            tracing::warn!(path = %path.display(), error = %error, "read settings failed");
            return Settings::default();
        }
    };
    match serde_json::from_str(&data) {
        Ok(settings) => settings,
        Err(error) => {
            tracing::warn!(path = %path.display(), error = %error, "parse settings failed");
            Settings::default()
        }
    }
}

/// Parses a key name: a single character, `^X` / `ctrl+x` control
/// characters, or a named terminal key (`up`, `f5`, ...).
pub fn parse_key(value: &str) -> Option<KeyCode> {
    let v = value.trim();
    if v.is_empty() {
        return None;
    }

    let lower = v.to_ascii_lowercase();
    let control = lower
        .strip_prefix("ctrl+")
        .or_else(|| lower.strip_prefix("control+"))
        .or_else(|| v.strip_prefix('^').filter(|rest| rest.len() == 1));
    if let Some(rest) = control {
        let mut chars = rest.chars();
        let ch = chars.next()?;
        if chars.next().is_some() || !ch.is_ascii() {
            return None;
        }
        return Some((ch.to_ascii_uppercase() as u8 & 0x1f) as KeyCode);
    }

    let code = match lower.as_str() {
        "up" => event::KEY_UP,
        "down" => event::KEY_DOWN,
        "left" => event::KEY_LEFT,
        "right" => event::KEY_RIGHT,
        "home" => event::KEY_HOME,
        "end" => event::KEY_END,
        "pageup" => event::KEY_PAGE_UP,
        "pagedown" => event::KEY_PAGE_DOWN,
        "insert" => event::KEY_INSERT,
        "delete" | "del" => event::KEY_DELETE,
        "backtab" => event::KEY_BACK_TAB,
        "backspace" => event::KEY_BACKSPACE,
        "enter" | "return" => event::CR as KeyCode,
        "tab" => event::TAB as KeyCode,
        "esc" | "escape" => 27,
        "space" => b' ' as KeyCode,
        _ if lower.len() > 1 && lower.starts_with('f') => {
            let n = lower[1..].parse::<u8>().ok()?;
            event::function_key(n)?
        }
        _ => {
            let mut chars = v.chars();
            let ch = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            u8::try_from(u32::from(ch)).ok()? as KeyCode
        }
    };
    Some(code)
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/settings.rs"]
mod tests;
