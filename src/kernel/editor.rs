//! The editor context: everything a session owns, threaded through every
//! operation as one value.

use super::code::{CodeArena, Instruction};
use super::files::FileTable;
use super::frame::Position;
use super::frames::FrameRegistry;
use super::keymap::Keymap;
use super::mode::{ExitRequest, ModeState};
use super::services::ports::{ScreenView, Settings, Terminal};

pub struct Editor {
    pub(crate) keymap: Keymap,
    pub(crate) frames: FrameRegistry,
    pub(crate) files: FileTable,
    pub(crate) mode: ModeState,
    pub(crate) settings: Settings,
    pub(crate) code: CodeArena,
    pub(crate) last_command: Option<Instruction>,
    pub(crate) terminal: Box<dyn Terminal>,
    pub(crate) message: Option<String>,
    pub(crate) wound_up: bool,
}

impl Editor {
    pub(crate) fn new(
        keymap: Keymap,
        settings: Settings,
        terminal: Box<dyn Terminal>,
        default_space: usize,
    ) -> Self {
        let mut mode = ModeState::new();
        mode.introducer = settings.introducer_byte();
        Self {
            keymap,
            frames: FrameRegistry::new(default_space),
            files: FileTable::new(),
            mode,
            settings,
            code: CodeArena::new(),
            last_command: None,
            terminal,
            message: None,
            wound_up: false,
        }
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    pub fn frames(&self) -> &FrameRegistry {
        &self.frames
    }

    pub fn frames_mut(&mut self) -> &mut FrameRegistry {
        &mut self.frames
    }

    pub fn files(&self) -> &FileTable {
        &self.files
    }

    pub fn mode(&self) -> &ModeState {
        &self.mode
    }

    pub fn mode_mut(&mut self) -> &mut ModeState {
        &mut self.mode
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn code(&self) -> &CodeArena {
        &self.code
    }

    pub fn exit_request(&self) -> Option<ExitRequest> {
        self.mode.exit_request
    }

    pub fn last_message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn last_command(&self) -> Option<&Instruction> {
        self.last_command.as_ref()
    }

    /// Shows a one-line message: on the message row in screen mode, through
    /// the terminal's fallback otherwise.
    pub fn screen_message(&mut self, text: &str) {
        tracing::debug!(message = text, "screen message");
        self.terminal.message(text);
        self.message = Some(text.to_string());
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    pub fn beep(&mut self) {
        if self.mode.is_screen() {
            self.terminal.beep();
        }
    }

    /// Brings the window over the dot and repaints the screen.
    pub fn screen_fixup(&mut self) {
        if !self.mode.is_screen() {
            return;
        }
        let height = self.mode.window_height();
        let Some(id) = self.frames.current_id() else {
            return;
        };
        if self.mode.scr_frame != Some(id) {
            self.mode.clear_screen_pointers();
            self.mode.scr_frame = Some(id);
        }
        let Some(frame) = self.frames.get(id) else {
            return;
        };
        let dot = frame.dot();
        if dot.line < self.mode.scr_top_line {
            self.mode.scr_top_line = dot.line;
        } else if dot.line >= self.mode.scr_top_line + height {
            self.mode.scr_top_line = dot.line + 1 - height;
        }
        self.mode.scr_bot_line = self.mode.scr_top_line + height - 1;

        let view = ScreenView {
            frame_name: frame.name(),
            lines: frame.visible_lines(self.mode.scr_top_line, height),
            top_line: self.mode.scr_top_line,
            left_col: self.mode.scr_left_col,
            dot_line: dot.line,
            dot_col: dot.col,
            insert_mode: self.mode.insert_mode(),
            message: self.message.as_deref(),
        };
        if let Err(error) = self.terminal.repaint(&view) {
            tracing::warn!(%error, "repaint failed");
        }
    }

    /// Re-reads the terminal size after a resize and repaints.
    pub fn resize(&mut self) -> bool {
        self.mode.tt_win_changed.clear();
        match self.terminal.requery_size() {
            Ok(size) => {
                self.mode.terminal_size = size;
                self.mode.scr_msg_row = size.1 + 1;
                self.screen_fixup();
                true
            }
            Err(error) => {
                tracing::warn!(%error, "terminal size query failed");
                false
            }
        }
    }

    /// Dot of the current frame, if there is one.
    pub fn dot(&self) -> Option<Position> {
        self.frames.current().map(|frame| frame.dot())
    }

    /// Text of the current frame.
    pub fn current_text(&self) -> String {
        self.frames
            .current()
            .map(|frame| frame.text())
            .unwrap_or_default()
    }
}

impl Drop for Editor {
    fn drop(&mut self) {
        self.windup();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/editor.rs"]
mod tests;
