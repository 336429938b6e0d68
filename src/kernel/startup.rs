//! Session start-up and wind-up.

use std::fmt;

use crate::core::{Command, LeadParam, TParObject};

use super::code::compile;
use super::editor::Editor;
use super::files::{file_create_open, page_load, quit_close_files, FileData, FileError};
use super::frame::{FrameError, EOP_OVERHEAD, MAX_SPACE};
use super::frames::DEFAULT_FRAME;
use super::keymap::{Dialect, Keymap};
use super::mode::{EditMode, ExitRequest};
use super::services::adapters::parse_key;
use super::services::ports::{Settings, Terminal};

/// Longest command line accepted.
pub const FILE_NAME_LEN: usize = 255;

#[derive(Debug)]
pub enum StartupError {
    ParameterTooLong,
    InvalidOption(String),
    TooManyFiles,
    File(FileError),
    Frame(FrameError),
    PageLoad(String),
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartupError::ParameterTooLong => write!(f, "Parameter too long"),
            StartupError::InvalidOption(option) => write!(f, "Invalid option: {}", option),
            StartupError::TooManyFiles => write!(f, "Too many file names"),
            StartupError::File(e) => write!(f, "{}", e),
            StartupError::Frame(e) => write!(f, "{}", e),
            StartupError::PageLoad(msg) => write!(f, "Cannot load input file: {}", msg),
        }
    }
}

impl std::error::Error for StartupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StartupError::File(e) => Some(e),
            StartupError::Frame(e) => Some(e),
            _ => None,
        }
    }
}

impl From<FileError> for StartupError {
    fn from(value: FileError) -> Self {
        StartupError::File(value)
    }
}

impl From<FrameError> for StartupError {
    fn from(value: FrameError) -> Self {
        StartupError::Frame(value)
    }
}

/// Builds a session from the command line. On error the partly built editor
/// is dropped, which restores the terminal.
pub fn start_up(
    command_line: &str,
    settings: Settings,
    terminal: Box<dyn Terminal>,
) -> Result<Editor, StartupError> {
    if command_line.len() > FILE_NAME_LEN {
        return Err(StartupError::ParameterTooLong);
    }
    let data = FileData::parse(command_line)?;
    let dialect = Dialect::from_old_flag(data.old_cmds);
    let space = data
        .space
        .unwrap_or(settings.default_space)
        .clamp(EOP_OVERHEAD, MAX_SPACE);
    let initial_file = data
        .initial_file
        .clone()
        .or_else(|| settings.initial_file.clone())
        .unwrap_or_default();

    let mut editor = Editor::new(Keymap::load(dialect), settings, terminal, space);
    let (input, output) = file_create_open(&data, &mut editor.files)?;

    if !data.batch {
        match editor.terminal.init() {
            Ok(size) => {
                editor.mode.edit_mode = EditMode::Screen;
                editor.mode.terminal_size = size;
                let introducer = editor.mode.introducer;
                editor.terminal.set_introducer(introducer);
            }
            Err(error) => {
                tracing::warn!(%error, "terminal unavailable, running in batch mode");
                editor.mode.edit_mode = EditMode::Batch;
            }
        }
    }
    editor.mode.scr_msg_row = editor.mode.terminal_size.1 + 1;

    editor.frames.create_mandatory()?;
    let default = editor.frames.edit(DEFAULT_FRAME)?;

    if editor.mode.is_screen() {
        editor.screen_fixup();
        editor.user_key_initialize();
    }

    for (slot, is_output) in [(input, false), (output, true)] {
        if let Some(slot) = slot {
            editor.frames.attach_file(default, slot, is_output)?;
            editor.files.set_frame(slot, default);
        }
    }

    if editor.mode.edit_mode != EditMode::Batch {
        editor.screen_message(concat!("LUDWIG ", env!("CARGO_PKG_VERSION")));
    }
    if let Some(slot) = input {
        let frame = editor
            .frames
            .get_mut(default)
            .ok_or(StartupError::Frame(FrameError::Fail))?;
        page_load(&editor.files, slot, frame).map_err(|e| StartupError::PageLoad(e.to_string()))?;
    }
    if editor.mode.is_screen() {
        editor.screen_fixup();
    }

    if !initial_file.is_empty() {
        let tpar = TParObject::exact(initial_file.as_str());
        if !editor.execute(Command::FileExecute, LeadParam::None, 1, Some(&tpar), true) {
            tracing::warn!(file = %initial_file, "initial file failed");
            editor.beep();
            editor.mode.exit_abort.clear();
        }
    }

    editor.mode.ludwig_aborted = true;
    tracing::info!(?dialect, mode = ?editor.mode.edit_mode, "startup complete");
    Ok(editor)
}

impl Editor {
    /// Compiles the configured key bindings onto their keys. Special keys
    /// cannot carry a compiled body and are skipped.
    pub fn user_key_initialize(&mut self) {
        let rules = self.settings.keys.clone();
        for rule in rules {
            let Some(code) = parse_key(&rule.key) else {
                tracing::warn!(key = %rule.key, "unknown key in settings");
                continue;
            };
            let body = match compile(&self.keymap, &rule.commands) {
                Ok(body) => body,
                Err(error) => {
                    tracing::warn!(key = %rule.key, %error, "key binding does not compile");
                    continue;
                }
            };
            let id = self.code.insert(body);
            if !self.keymap.bind_code(code, id) {
                self.code.release(id);
                tracing::warn!(key = %rule.key, "special keys cannot carry commands");
            }
        }
    }

    /// Shuts the session down: closes files, saving outputs unless the
    /// session was aborted or failed, and releases the terminal. Safe to call
    /// more than once.
    pub fn windup(&mut self) {
        if self.wound_up {
            return;
        }
        self.wound_up = true;
        let hangup = self.mode.hangup.is_set();
        tracing::info!(hangup, exit = ?self.mode.exit_request, "windup");

        self.mode.edit_mode = EditMode::Batch;
        self.mode.clear_screen_pointers();
        self.mode.tt_control_c.clear();
        self.mode.exit_abort.clear();

        let save = self.mode.ludwig_aborted
            && !matches!(
                self.mode.exit_request,
                Some(ExitRequest::Abort | ExitRequest::Fail)
            );
        let frames = &self.frames;
        let errors = quit_close_files(&mut self.files, |id| frames.get(id), save);
        self.terminal.restore();
        for error in errors {
            self.terminal.message(&error.to_string());
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/startup.rs"]
mod tests;
