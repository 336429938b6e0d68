//! Top-level read/execute loop.

use crate::core::event::{BS, CR, CTRL_C, DEL, KEY_BACKSPACE, LF};
use crate::core::event::byte_to_char;

use super::editor::Editor;
use super::frame::Position;
use super::mode::ExitRequest;
use super::reader::{CommandReader, ReadError, ReadOutcome};
use super::services::ports::KeySource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    Success,
    Fail,
    Abort,
    EndOfInput,
    Hangup,
}

impl LoopExit {
    /// Process exit status. An abort only counts as failure once start-up
    /// has completed.
    pub fn exit_code(self, ludwig_aborted: bool) -> i32 {
        match self {
            LoopExit::Fail => 1,
            LoopExit::Abort if ludwig_aborted => 1,
            _ => 0,
        }
    }
}

impl From<ExitRequest> for LoopExit {
    fn from(value: ExitRequest) -> Self {
        match value {
            ExitRequest::Success => LoopExit::Success,
            ExitRequest::Fail => LoopExit::Fail,
            ExitRequest::Abort => LoopExit::Abort,
        }
    }
}

impl Editor {
    pub fn execute_immediate(&mut self, keys: &mut dyn KeySource) -> LoopExit {
        loop {
            if self.mode.hangup.is_set() {
                self.windup();
                return LoopExit::Hangup;
            }
            if let Some(request) = self.mode.exit_request {
                return request.into();
            }
            if self.mode.tt_control_c.take() {
                self.beep();
                self.clear_message();
                self.mode.exit_abort.clear();
            }
            if self.mode.tt_win_changed.is_set() {
                self.resize();
            }

            let reader = if self.mode.is_screen() {
                CommandReader::interactive(self.mode.introducer)
            } else {
                CommandReader::batch()
            };
            let ok = match reader.read(&self.keymap, keys) {
                Ok(ReadOutcome::EndOfInput) => return LoopExit::EndOfInput,
                Ok(ReadOutcome::Resize) => self.resize(),
                Ok(ReadOutcome::Introducer) => self.command_line(keys),
                Ok(ReadOutcome::Code(id)) => match self.code.get(id).map(<[_]>::to_vec) {
                    Some(body) => self.execute_code(&body),
                    None => false,
                },
                Ok(ReadOutcome::Instruction(instruction)) => {
                    self.clear_message();
                    self.execute(
                        instruction.command,
                        instruction.lead,
                        instruction.count,
                        instruction.tpar.as_ref(),
                        false,
                    )
                }
                Err(ReadError::Io(error)) => {
                    tracing::error!(%error, "key input failed");
                    return LoopExit::Fail;
                }
                Err(error) => {
                    self.screen_message(&error.to_string());
                    false
                }
            };

            if !ok && self.mode.exit_request.is_none() {
                self.beep();
            }
            if self.mode.exit_request.is_none() {
                self.mode.exit_abort.clear();
            }
            self.screen_fixup();
        }
    }

    /// Reads one line after the introducer, records it in `COMMAND` and runs
    /// it against the current frame.
    fn command_line(&mut self, keys: &mut dyn KeySource) -> bool {
        let prompt = byte_to_char(self.mode.introducer);
        let mut line = String::new();
        self.screen_message(&prompt.to_string());
        loop {
            let key = match keys.next_key() {
                Ok(Some(key)) => key,
                Ok(None) => return false,
                Err(error) => {
                    tracing::error!(%error, "key input failed");
                    return false;
                }
            };
            if key.code == KEY_BACKSPACE {
                line.pop();
            } else if let Some(b) = key.as_byte() {
                match b {
                    CR | LF => break,
                    BS | DEL => {
                        line.pop();
                    }
                    CTRL_C => {
                        self.clear_message();
                        return false;
                    }
                    _ => line.push(byte_to_char(b)),
                }
            }
            self.screen_message(&format!("{}{}", prompt, line));
        }
        self.clear_message();

        if let Some(command) = self.frames.command_id().and_then(|id| self.frames.get_mut(id)) {
            let end = Position::new(command.line_count(), 0);
            let recorded = command
                .set_dot(end)
                .and_then(|_| command.insert_text(&format!("{}\n", line), 1));
            if let Err(error) = recorded {
                tracing::warn!(%error, "command line not recorded");
            }
        }
        self.execute_typed(&line)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/immediate.rs"]
mod tests;
