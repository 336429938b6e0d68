//! Session mode and the flags the signal layer and commands communicate
//! through.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::frames::FrameId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    Screen,
    #[default]
    Batch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextMode {
    #[default]
    Insert,
    Overtype,
}

/// Why the top-level loop should stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitRequest {
    Success,
    Fail,
    Abort,
}

/// Shared boolean flag. Clones observe the same value, so a clone can be
/// handed to a signal handler.
#[derive(Debug, Clone, Default)]
pub struct AbortFlag(Arc<AtomicBool>);

impl AbortFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    pub fn set(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn clear(&self) {
        self.0.store(false, Ordering::SeqCst);
    }

    /// Clears the flag, returning whether it was set.
    pub fn take(&self) -> bool {
        self.0.swap(false, Ordering::SeqCst)
    }

    pub fn handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.0)
    }
}

#[derive(Debug, Clone)]
pub struct ModeState {
    pub edit_mode: EditMode,
    pub text_mode: TextMode,
    pub exit_abort: AbortFlag,
    pub tt_control_c: AbortFlag,
    pub tt_win_changed: AbortFlag,
    pub hangup: AbortFlag,
    pub exit_request: Option<ExitRequest>,
    /// Set once startup completes; an abort after that is a failed session.
    pub ludwig_aborted: bool,
    pub introducer: u8,
    pub terminal_size: (u16, u16),
    pub scr_msg_row: u16,
    pub scr_frame: Option<FrameId>,
    pub scr_top_line: usize,
    pub scr_bot_line: usize,
    pub scr_left_col: usize,
}

impl Default for ModeState {
    fn default() -> Self {
        Self::new()
    }
}

impl ModeState {
    pub fn new() -> Self {
        Self {
            edit_mode: EditMode::Batch,
            text_mode: TextMode::Insert,
            exit_abort: AbortFlag::new(),
            tt_control_c: AbortFlag::new(),
            tt_win_changed: AbortFlag::new(),
            hangup: AbortFlag::new(),
            exit_request: None,
            ludwig_aborted: false,
            introducer: b'\\',
            terminal_size: (80, 24),
            scr_msg_row: 25,
            scr_frame: None,
            scr_top_line: 0,
            scr_bot_line: 0,
            scr_left_col: 0,
        }
    }

    pub fn is_screen(&self) -> bool {
        self.edit_mode == EditMode::Screen
    }

    pub fn insert_mode(&self) -> bool {
        self.text_mode == TextMode::Insert
    }

    /// Lines available to the frame window: everything but the message row.
    pub fn window_height(&self) -> usize {
        usize::from(self.terminal_size.1.saturating_sub(1)).max(1)
    }

    pub fn clear_screen_pointers(&mut self) {
        self.scr_frame = None;
        self.scr_top_line = 0;
        self.scr_bot_line = 0;
        self.scr_left_col = 0;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/mode.rs"]
mod tests;
