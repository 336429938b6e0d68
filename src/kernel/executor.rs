//! Command execution.
//!
//! `execute` is the single entry point for every command, whether typed,
//! compiled from a string or replayed. It owns the cross-cutting policy:
//! abort and hangup handling, repeat loops, and `DoLastCommand` capture.
//! Command bodies report failure by returning `false`; a message is shown
//! only when the failure has something to say.

use std::path::PathBuf;

use crate::core::{Command, LeadParam, TParObject, TparDelimiter};
use crate::help::HelpFile;

use super::code::{compile, Instruction};
use super::editor::Editor;
use super::files::{page_load, read_latin1, write_latin1};
use super::frame::{self, Align, CaseChange, Frame, FrameError, FrameOptions, Position};
use super::mode::{ExitRequest, TextMode};

const DEFAULT_MARGIN_RIGHT: usize = 79;
const HELP_FRAME: &str = "HELP";

/// How many times a repeating body runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Repeat {
    Times(u32),
    /// Until the body fails.
    Indefinite,
}

impl Repeat {
    fn of(lead: LeadParam, count: i32) -> Self {
        if lead.is_indefinite() {
            Repeat::Indefinite
        } else {
            Repeat::Times(count.unsigned_abs())
        }
    }
}

impl Editor {
    /// Runs one command. `from_init` marks executions that must not become
    /// the target of `DoLastCommand`.
    pub fn execute(
        &mut self,
        command: Command,
        lead: LeadParam,
        count: i32,
        tpar: Option<&TParObject>,
        from_init: bool,
    ) -> bool {
        self.execute_inner(command, lead, count, tpar, !from_init)
    }

    fn execute_inner(
        &mut self,
        command: Command,
        lead: LeadParam,
        count: i32,
        tpar: Option<&TParObject>,
        capture: bool,
    ) -> bool {
        if self.mode.exit_abort.is_set() {
            return false;
        }
        let command = if command.is_prefix() {
            tracing::error!(?command, "prefix reached the executor");
            Command::NoSuch
        } else {
            command
        };

        let ok = if command == Command::DoLastCommand {
            match self.last_command.clone() {
                Some(last) => {
                    self.execute_inner(last.command, last.lead, last.count, last.tpar.as_ref(), false)
                }
                None => {
                    self.screen_message("No previous command");
                    false
                }
            }
        } else {
            if capture {
                self.last_command = Some(Instruction {
                    command,
                    lead,
                    count,
                    tpar: tpar.cloned(),
                });
            }
            tracing::debug!(command = command.name(), ?lead, count, "execute");
            if command.attrib().repeat {
                self.repeat(command, lead, count, tpar)
            } else {
                self.perform(command, lead, count, tpar)
            }
        };

        if self.mode.hangup.is_set() {
            self.windup();
            return false;
        }
        ok && !self.mode.exit_abort.is_set()
    }

    /// Runs a repeating body, polling for Ctrl-C between iterations.
    fn repeat(
        &mut self,
        command: Command,
        lead: LeadParam,
        count: i32,
        tpar: Option<&TParObject>,
    ) -> bool {
        let times = Repeat::of(lead, count);
        let mut done: u32 = 0;
        loop {
            if let Repeat::Times(n) = times {
                if done >= n {
                    return true;
                }
            }
            if self.mode.tt_control_c.take() {
                self.mode.exit_abort.set();
            }
            if self.mode.exit_abort.is_set() {
                return false;
            }
            if !self.perform(command, lead, count, tpar) {
                return times == Repeat::Indefinite;
            }
            done = done.saturating_add(1);
        }
    }

    /// Runs a compiled body. Stops at the first failure, on abort, or once
    /// an exit has been requested.
    pub fn execute_code(&mut self, body: &[Instruction]) -> bool {
        self.run_body(body, false)
    }

    fn run_body(&mut self, body: &[Instruction], capture: bool) -> bool {
        for instruction in body {
            let ok = self.execute_inner(
                instruction.command,
                instruction.lead,
                instruction.count,
                instruction.tpar.as_ref(),
                capture,
            );
            if !ok {
                return false;
            }
            if self.mode.exit_request.is_some() || self.mode.hangup.is_set() {
                break;
            }
        }
        true
    }

    /// Compiles `text` and runs it.
    pub fn execute_string(&mut self, text: &str) -> bool {
        self.compile_and_run(text, false)
    }

    /// Runs a line typed after the introducer. Its commands become targets
    /// of `DoLastCommand`, as if typed one by one.
    pub(crate) fn execute_typed(&mut self, text: &str) -> bool {
        self.compile_and_run(text, true)
    }

    fn compile_and_run(&mut self, text: &str, capture: bool) -> bool {
        match compile(&self.keymap, text) {
            Ok(body) => self.run_body(&body, capture),
            Err(error) => {
                self.screen_message(&error.to_string());
                false
            }
        }
    }

    /// Text of a trailing parameter after delimiter processing.
    fn tpar_text(&self, tpar: Option<&TParObject>) -> String {
        let Some(tpar) = tpar else {
            return String::new();
        };
        match tpar.dlm {
            TparDelimiter::Exact | TparDelimiter::Smart => tpar.full_text(),
            TparDelimiter::Environment => std::env::var(tpar.text.trim()).unwrap_or_default(),
            TparDelimiter::Span => self
                .frames
                .by_name(&tpar.text)
                .map(|frame| {
                    let mut text = frame.text();
                    if text.ends_with('\n') {
                        text.pop();
                    }
                    text
                })
                .unwrap_or_default(),
            // No prompt channel reaches the executor; the answer is empty.
            TparDelimiter::Prompt => String::new(),
        }
    }

    /// Applies `f` to the current frame and reports its error, if any.
    fn on_frame<R>(&mut self, f: impl FnOnce(&mut Frame) -> frame::Result<R>) -> Option<R> {
        let result = match self.frames.current_mut() {
            Some(frame) => f(frame),
            None => Err(FrameError::Fail),
        };
        self.report(result)
    }

    fn report<R>(&mut self, result: frame::Result<R>) -> Option<R> {
        match result {
            Ok(value) => Some(value),
            Err(FrameError::Fail) => None,
            Err(error) => {
                self.screen_message(&error.to_string());
                None
            }
        }
    }

    fn frame_ok(&mut self, f: impl FnOnce(&mut Frame) -> frame::Result<()>) -> bool {
        self.on_frame(f).is_some()
    }

    fn delete_to_oops(&mut self, f: impl FnOnce(&mut Frame) -> frame::Result<String>) -> bool {
        match self.on_frame(f) {
            Some(text) => {
                self.frames.save_to_oops(&text);
                true
            }
            None => false,
        }
    }

    fn test(&mut self, lead: LeadParam, f: impl FnOnce(&Frame) -> bool) -> bool {
        let Some(frame) = self.frames.current() else {
            return false;
        };
        f(frame) != (lead == LeadParam::Minus)
    }

    fn perform(
        &mut self,
        command: Command,
        lead: LeadParam,
        count: i32,
        tpar: Option<&TParObject>,
    ) -> bool {
        use Command::*;

        let forwards = !lead.is_backwards();
        let n = i64::from(count);
        let fold = tpar.map(|t| t.dlm == TparDelimiter::Smart).unwrap_or(false);
        let insert_mode = self.mode.insert_mode();

        match command {
            Noop => true,

            Up | Down => {
                let down = (command == Down) == forwards;
                if lead.is_indefinite() {
                    return self.frame_ok(|f| {
                        let line = if down { f.line_count() } else { 0 };
                        f.set_dot(Position::new(line, f.dot().col))
                    });
                }
                let lines = if command == Up { -n } else { n };
                self.frame_ok(|f| f.move_lines(lines))
            }
            Left | Right => {
                if lead.is_indefinite() {
                    let right = command == Right;
                    return self.frame_ok(|f| {
                        let col = if right { f.line_len(f.dot().line) } else { 0 };
                        f.set_dot(Position::new(f.dot().line, col))
                    });
                }
                let cols = if command == Left { -n } else { n };
                self.frame_ok(|f| f.jump(cols))
            }
            Home => {
                let top = self.mode.scr_top_line;
                self.frame_ok(|f| f.set_dot(Position::new(top.min(f.line_count()), 0)))
            }
            Return => self.frame_ok(|f| f.return_line()),
            Tab => self.frame_ok(|f| f.tab(forwards)),
            Backtab => self.frame_ok(|f| f.tab(!forwards)),
            Rubout => match Repeat::of(lead, count) {
                Repeat::Indefinite => {
                    self.frame_ok(|f| {
                        while f.rubout(insert_mode).is_ok() {}
                        Ok(())
                    })
                }
                Repeat::Times(times) => self.frame_ok(|f| {
                    for _ in 0..times {
                        f.rubout(insert_mode)?;
                    }
                    Ok(())
                }),
            },
            Jump => match lead {
                LeadParam::Marker => {
                    let mark = count.unsigned_abs() as usize;
                    self.frame_ok(|f| {
                        let pos = f.mark(mark).ok_or(FrameError::Fail)?;
                        f.set_dot(pos)
                    })
                }
                LeadParam::Pindef | LeadParam::Nindef => self.frame_ok(|f| {
                    let col = if forwards { f.line_len(f.dot().line) } else { 0 };
                    f.set_dot(Position::new(f.dot().line, col))
                }),
                _ => self.frame_ok(|f| f.jump(n)),
            },
            Advance => match lead {
                LeadParam::Pindef | LeadParam::Nindef => self.frame_ok(|f| {
                    f.advance_to_end(forwards);
                    Ok(())
                }),
                _ => self.frame_ok(|f| f.advance(n)),
            },
            PositionColumn => {
                let col = count.max(1) as usize - 1;
                self.frame_ok(|f| f.set_dot(Position::new(f.dot().line, col)))
            }
            PositionLine => {
                let line = count.max(1) as usize - 1;
                self.frame_ok(|f| f.set_dot(Position::new(line, 0)))
            }

            WindowForward | WindowBackward => {
                let height = self.mode.window_height() as i64;
                let down = (command == WindowForward) == forwards;
                let pages = if lead.is_indefinite() { i64::from(u16::MAX) } else { n.abs().max(1) };
                let delta = if down { height * pages } else { -height * pages };
                let moved = self.on_frame(|f| {
                    let dot = f.dot();
                    let target = (dot.line as i64 + delta).clamp(0, f.line_count() as i64) as usize;
                    if target == dot.line {
                        return Err(FrameError::Fail);
                    }
                    f.set_dot(Position::new(target, dot.col))?;
                    Ok(target as i64 - dot.line as i64)
                });
                match moved {
                    Some(lines) => {
                        self.scroll_window(lines);
                        true
                    }
                    None => false,
                }
            }
            WindowTop => self.frame_ok(|f| f.set_dot(Position::new(0, 0))),
            WindowEnd => self.frame_ok(|f| f.set_dot(Position::new(f.line_count(), 0))),
            WindowMiddle => {
                let half = self.mode.window_height() / 2;
                match self.dot() {
                    Some(dot) => {
                        self.mode.scr_top_line = dot.line.saturating_sub(half);
                        self.screen_fixup();
                        true
                    }
                    None => false,
                }
            }
            WindowNew | WindowUpdate => {
                self.screen_fixup();
                true
            }
            WindowSetHeight => {
                let height = u16::try_from(count).unwrap_or(u16::MAX);
                match self.frames.current_id() {
                    Some(id) => {
                        let result = self.frames.set_height(id, height);
                        self.report(result).is_some()
                    }
                    None => false,
                }
            }
            WindowScroll => {
                if self.frame_ok(|f| f.move_lines(n)) {
                    self.scroll_window(n);
                    true
                } else {
                    false
                }
            }
            WindowLeft | WindowRight => {
                let step = usize::from(self.mode.terminal_size.0 / 2).max(1) * n.unsigned_abs() as usize;
                let right = (command == WindowRight) == forwards;
                let left_col = self.mode.scr_left_col;
                if right {
                    self.mode.scr_left_col = left_col.saturating_add(step).min(frame::MAX_COL);
                } else {
                    if left_col == 0 {
                        return false;
                    }
                    self.mode.scr_left_col = left_col.saturating_sub(step);
                }
                true
            }

            Get => {
                let text = self.tpar_text(tpar);
                self.frame_ok(|f| f.get(&text, forwards, fold))
            }
            Next => {
                let set = self.tpar_text(tpar);
                self.frame_ok(|f| f.next_in_set(&set, forwards))
            }
            Bridge => {
                let set = self.tpar_text(tpar);
                self.frame_ok(|f| f.bridge(&set, forwards))
            }
            Replace => {
                let old = self.tpar_text(tpar);
                let new = self.tpar_text(tpar.and_then(TParObject::next));
                self.frame_ok(|f| f.replace(&old, &new, forwards, fold))
            }
            EqualString => {
                let text = self.tpar_text(tpar);
                self.test(lead, |f| f.matches_at_dot(&text, fold))
            }
            EqualColumn => {
                let col = count.max(1) as usize - 1;
                self.test(lead, |f| f.dot().col == col)
            }
            EqualMark => {
                let mark = count.unsigned_abs().max(1) as usize;
                self.test(lead, |f| f.mark(mark) == Some(f.dot()))
            }
            EqualEol => self.test(lead, Frame::at_eol),
            EqualEop | EqualEof => self.test(lead, Frame::at_eop),

            OvertypeMode => {
                self.mode.text_mode = TextMode::Overtype;
                true
            }
            InsertMode => {
                self.mode.text_mode = TextMode::Insert;
                true
            }
            InsertText | OvertypeText | TypeText => {
                let text = self.tpar_text(tpar);
                let insert = match command {
                    InsertText => true,
                    OvertypeText => false,
                    _ => insert_mode,
                };
                if insert {
                    self.frame_ok(|f| f.insert_text(&text, 1))
                } else {
                    self.frame_ok(|f| f.overtype_text(&text, 1))
                }
            }
            InsertLine => {
                if lead.is_indefinite() {
                    return false;
                }
                let lines = n.unsigned_abs() as usize;
                self.frame_ok(|f| {
                    f.insert_lines(lines)?;
                    if !forwards {
                        let dot = f.dot();
                        f.set_dot(Position::new(dot.line + lines, dot.col))?;
                    }
                    Ok(())
                })
            }
            InsertChar => {
                if lead.is_indefinite() {
                    return false;
                }
                let chars = n.unsigned_abs() as usize;
                self.frame_ok(|f| {
                    f.insert_spaces(chars)?;
                    if !forwards {
                        f.jump(chars as i64)?;
                    }
                    Ok(())
                })
            }
            DeleteLine => match lead {
                LeadParam::Marker => {
                    let mark = count.unsigned_abs() as usize;
                    self.delete_to_oops(|f| f.delete_to_mark(mark))
                }
                LeadParam::Pindef => {
                    self.delete_to_oops(|f| f.delete_lines((f.line_count() - f.dot().line) as i64))
                }
                LeadParam::Nindef => self.delete_to_oops(|f| f.delete_lines(-(f.dot().line as i64))),
                _ => self.delete_to_oops(|f| f.delete_lines(n)),
            },
            DeleteChar => match lead {
                LeadParam::Pindef => self.delete_to_oops(|f| {
                    let rest = f.line_len(f.dot().line).saturating_sub(f.dot().col);
                    f.delete_chars(rest as i64)
                }),
                LeadParam::Nindef => self.delete_to_oops(|f| {
                    let before = f.dot().col.min(f.line_len(f.dot().line));
                    f.delete_chars(-(before as i64))
                }),
                _ => self.delete_to_oops(|f| f.delete_chars(n)),
            },
            SwapLine => self.frame_ok(|f| f.swap_line(forwards)),
            SplitLine => self.frame_ok(|f| f.split_line()),
            DittoUp | DittoDown => {
                let above = command == DittoUp;
                if forwards {
                    self.frame_ok(|f| f.ditto(above))
                } else {
                    self.frame_ok(|f| {
                        f.jump(-1)?;
                        f.ditto(above)?;
                        f.jump(-1)
                    })
                }
            }
            CaseUp | CaseLow | CaseEdit => {
                let change = match command {
                    CaseUp => CaseChange::Up,
                    CaseLow => CaseChange::Low,
                    _ => CaseChange::Edit,
                };
                self.frame_ok(|f| f.change_case(change, forwards))
            }
            SetMarginLeft | SetMarginRight => {
                let left = command == SetMarginLeft;
                self.frame_ok(|f| {
                    let col = match lead {
                        LeadParam::Minus if left => 0,
                        LeadParam::Minus => DEFAULT_MARGIN_RIGHT,
                        LeadParam::Pint => usize::try_from(count)
                            .ok()
                            .and_then(|c| c.checked_sub(1))
                            .ok_or(FrameError::Fail)?,
                        _ => f.dot().col,
                    };
                    if left {
                        if col >= f.margin_right {
                            return Err(FrameError::Fail);
                        }
                        f.margin_left = col;
                    } else {
                        if col <= f.margin_left || col > frame::MAX_COL {
                            return Err(FrameError::Fail);
                        }
                        f.margin_right = col;
                    }
                    Ok(())
                })
            }
            LineCentre | LineLeft | LineRight => {
                let align = match command {
                    LineCentre => Align::Centre,
                    LineLeft => Align::Left,
                    _ => Align::Right,
                };
                self.frame_ok(|f| f.align_line(align))
            }
            WordAdvance => self.frame_ok(|f| f.word_advance(forwards)),
            WordDelete => self.delete_to_oops(|f| {
                if !forwards {
                    f.word_advance(false)?;
                }
                f.word_delete()
            }),

            FrameKill => {
                let name = self.tpar_text(tpar);
                let result = self.frames.kill(&name);
                self.report(result).is_some()
            }
            FrameEdit => {
                let name = self.tpar_text(tpar);
                let result = self.frames.edit(&name);
                self.report(result).is_some()
            }
            FrameReturn => {
                let result = self.frames.frame_return();
                self.report(result).is_some()
            }
            FrameParameters => {
                let text = self.tpar_text(tpar);
                self.frame_parameters(&text)
            }

            FileInput => {
                let path = PathBuf::from(self.tpar_text(tpar).trim());
                self.file_input(path)
            }
            FileOutput => {
                let path = PathBuf::from(self.tpar_text(tpar).trim());
                self.file_output(path)
            }
            FileWrite => self.file_write(),
            FileExecute => {
                let path = PathBuf::from(self.tpar_text(tpar).trim());
                match read_latin1(&path) {
                    Ok(text) => self.execute_string(&text),
                    Err(error) => {
                        self.screen_message(&error.to_string());
                        false
                    }
                }
            }
            ExecuteString => {
                let text = self.tpar_text(tpar);
                self.execute_string(&text)
            }
            UserCommandIntroducer => {
                let text = self.tpar_text(tpar);
                let Some(b) = text.chars().next().and_then(|ch| u8::try_from(u32::from(ch)).ok())
                else {
                    return false;
                };
                if b.is_ascii_alphanumeric() || b == b' ' {
                    self.screen_message("Illegal command introducer");
                    return false;
                }
                self.mode.introducer = b;
                self.terminal.set_introducer(b);
                true
            }

            ResizeWindow => self.resize(),
            Help => {
                let key = self.tpar_text(tpar);
                self.help(&key)
            }
            Verify => {
                let text = self.tpar_text(tpar);
                if !text.is_empty() {
                    self.screen_message(&text);
                }
                true
            }
            Mark => {
                let mark = count.unsigned_abs().max(1) as usize;
                if lead.is_backwards() {
                    self.frame_ok(|f| f.clear_mark(mark))
                } else {
                    self.frame_ok(|f| f.set_mark(mark))
                }
            }
            // Input files are read whole when opened; there is never a
            // further page to fetch.
            Page => false,
            Quit | ExitSuccess => {
                self.mode.exit_request = Some(ExitRequest::Success);
                true
            }
            ExitFail => {
                self.mode.exit_request = Some(ExitRequest::Fail);
                true
            }
            ExitAbort => {
                self.mode.exit_abort.set();
                self.mode.exit_request = Some(ExitRequest::Abort);
                false
            }
            Dump => {
                let lines: Vec<String> = self.frames.iter().map(|(_, f)| f.dump()).collect();
                for line in &lines {
                    tracing::info!(target: "ludwig::dump", "{}", line);
                }
                let summary = format!("{} frames; see log", lines.len());
                self.screen_message(&summary);
                true
            }
            Validate => match self.frames.validate() {
                Ok(()) => true,
                Err(problem) => {
                    tracing::error!(%problem, "validation failed");
                    self.screen_message(&problem);
                    false
                }
            },
            NoSuch => {
                self.screen_message("No such command");
                false
            }
            DoLastCommand | Prefix(_) => false,
            _ => {
                self.screen_message("Command not implemented");
                false
            }
        }
    }

    fn scroll_window(&mut self, lines: i64) {
        let top = self.mode.scr_top_line as i64 + lines;
        self.mode.scr_top_line = top.max(0) as usize;
    }

    /// `key=value` pairs separated by blanks or commas: `h` window height,
    /// `s` space limit, `o` options (`r` read-only, `-r` writable).
    fn frame_parameters(&mut self, text: &str) -> bool {
        let Some(id) = self.frames.current_id() else {
            return false;
        };
        if text.trim().is_empty() {
            let dump = self.frames.get(id).map(Frame::dump).unwrap_or_default();
            self.screen_message(&dump);
            return true;
        }
        for item in text.split(|c: char| c == ',' || c.is_whitespace()).filter(|s| !s.is_empty()) {
            let Some((key, value)) = item.split_once('=') else {
                self.screen_message("Invalid frame parameter");
                return false;
            };
            let value = value.trim();
            let result = match key.trim().to_ascii_lowercase().as_str() {
                "h" | "height" => match value.parse::<u16>() {
                    Ok(h) => self.frames.set_height(id, h),
                    Err(_) => Err(FrameError::Fail),
                },
                "s" | "space" => match (value.parse::<usize>(), self.frames.get_mut(id)) {
                    (Ok(space), Some(frame)) => frame.set_space_limit(space),
                    _ => Err(FrameError::Fail),
                },
                "o" | "options" => {
                    let options = self.frames.get(id).map(|f| f.options).unwrap_or_default();
                    let updated = match value.to_ascii_lowercase().as_str() {
                        "r" => Ok(options | FrameOptions::READ_ONLY),
                        "-r" => Ok(options - FrameOptions::READ_ONLY),
                        _ => Err(FrameError::Fail),
                    };
                    updated.and_then(|o| self.frames.set_options(id, o))
                }
                _ => Err(FrameError::Fail),
            };
            if let Err(error) = result {
                let text = match error {
                    FrameError::Fail => "Invalid frame parameter".to_string(),
                    other => other.to_string(),
                };
                self.screen_message(&text);
                return false;
            }
        }
        true
    }

    fn file_input(&mut self, path: PathBuf) -> bool {
        let Some(id) = self.frames.current_id() else {
            return false;
        };
        let slot = match self.files.open_input(&path, false) {
            Ok(slot) => slot,
            Err(error) => {
                self.screen_message(&error.to_string());
                return false;
            }
        };
        self.files.set_frame(slot, id);
        let text = match read_latin1(&path) {
            Ok(text) => text,
            Err(error) => {
                self.screen_message(&error.to_string());
                return false;
            }
        };
        let empty = self.frames.get(id).map(|f| f.line_count() == 0).unwrap_or(false);
        let result = match self.frames.get_mut(id) {
            Some(frame) if empty => {
                let loaded = page_load(&self.files, slot, frame);
                frame.input_file = Some(slot);
                return match loaded {
                    Ok(()) => true,
                    Err(error) => {
                        self.screen_message(&error.to_string());
                        false
                    }
                };
            }
            Some(frame) => {
                frame.input_file = Some(slot);
                let dot = frame.dot();
                frame
                    .set_dot(Position::new(dot.line, 0))
                    .and_then(|_| frame.insert_text(&text, 1))
            }
            None => Err(FrameError::Fail),
        };
        self.report(result).is_some()
    }

    fn file_output(&mut self, path: PathBuf) -> bool {
        let Some(id) = self.frames.current_id() else {
            return false;
        };
        if self.frames.get(id).and_then(|f| f.output_file).is_some() {
            self.screen_message("Frame already has an output file");
            return false;
        }
        match self.files.open_output(&path) {
            Ok(slot) => {
                self.files.set_frame(slot, id);
                let result = self.frames.attach_file(id, slot, true);
                self.report(result).is_some()
            }
            Err(error) => {
                self.screen_message(&error.to_string());
                false
            }
        }
    }

    fn file_write(&mut self) -> bool {
        let Some(frame) = self.frames.current() else {
            return false;
        };
        let text = frame.text();
        let path = frame
            .output_file
            .and_then(|slot| self.files.get(slot))
            .map(|file| file.path.clone());
        let Some(path) = path else {
            self.screen_message("No output file");
            return false;
        };
        match write_latin1(&path, &text) {
            Ok(()) => true,
            Err(error) => {
                self.screen_message(&error.to_string());
                false
            }
        }
    }

    /// Loads a help section into the `HELP` frame and switches to it.
    fn help(&mut self, key: &str) -> bool {
        let Some(path) = self.settings.help_file.clone() else {
            self.screen_message("No help file configured");
            return false;
        };
        let data = match std::fs::read(&path) {
            Ok(data) => data,
            Err(error) => {
                self.screen_message(&format!("{}: {}", path.display(), error));
                return false;
            }
        };
        let help = match HelpFile::parse(&data) {
            Ok(help) => help,
            Err(error) => {
                self.screen_message(&error.to_string());
                return false;
            }
        };
        let text = if key.trim().is_empty() {
            help.contents()
        } else {
            match help.section(key) {
                Some(body) => body,
                None => {
                    self.screen_message(&format!("No help for {}", key.trim()));
                    return false;
                }
            }
        };
        let text: String = text.iter().map(|&b| char::from(b)).collect();
        let result = self.frames.edit(HELP_FRAME).and_then(|id| {
            self.frames
                .get_mut(id)
                .ok_or(FrameError::Fail)
                .and_then(|frame| frame.load_text(&text))
        });
        self.report(result).is_some()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/executor.rs"]
mod tests;
