//! Frame: a named editing buffer.
//!
//! Text is kept as a rope of newline-terminated lines. The dot may sit past
//! the end of a line (virtual space) or on the null line after the last one
//! (end of page); edits there materialise the missing spaces and lines.

use std::fmt;

use bitflags::bitflags;
use compact_str::CompactString;
use ropey::Rope;

/// Space given to `OOPS`.
pub const MAX_SPACE: usize = 1_000_000;
/// Space given to ordinary frames unless configured otherwise.
pub const DEFAULT_SPACE: usize = 100_000;
/// Reserved for the end-of-page line of every frame.
pub const EOP_OVERHEAD: usize = 50;
pub const MAX_MARKS: usize = 9;
/// Rightmost column the dot may reach (0-based).
pub const MAX_COL: usize = 400;
pub const TAB_WIDTH: usize = 8;
pub const DEFAULT_HEIGHT: u16 = 20;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct FrameOptions: u8 {
        /// Mandatory frame; cannot be killed.
        const SPECIAL_FRAME = 0b0001;
        /// Text may not be modified.
        const READ_ONLY = 0b0010;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    NotFound(String),
    Special(String),
    Current(String),
    Exists(String),
    NoRoom,
    ReadOnly,
    /// The command cannot be carried out; no message.
    Fail,
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::NotFound(name) => write!(f, "No such frame: {}", name),
            FrameError::Special(name) => write!(f, "Frame {} cannot be killed", name),
            FrameError::Current(name) => write!(f, "Frame {} is in use", name),
            FrameError::Exists(name) => write!(f, "Frame {} already exists", name),
            FrameError::NoRoom => write!(f, "No room in frame"),
            FrameError::ReadOnly => write!(f, "Frame is read-only"),
            FrameError::Fail => write!(f, "Command failed"),
        }
    }
}

impl std::error::Error for FrameError {}

pub type Result<T> = std::result::Result<T, FrameError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseChange {
    Up,
    Low,
    /// Upper-case the first letter of each word, lower-case the rest.
    Edit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
    Centre,
}

#[derive(Debug, Clone)]
pub struct Frame {
    name: CompactString,
    pub options: FrameOptions,
    space_limit: usize,
    pub input_file: Option<usize>,
    pub output_file: Option<usize>,
    text: Rope,
    dot: Position,
    marks: [Option<Position>; MAX_MARKS],
    pub margin_left: usize,
    pub margin_right: usize,
    pub height: u16,
    modified: bool,
}

impl Frame {
    pub fn new(name: &str, space_limit: usize) -> Self {
        Self {
            name: CompactString::from(name.to_ascii_uppercase()),
            options: FrameOptions::empty(),
            space_limit: space_limit.max(EOP_OVERHEAD),
            input_file: None,
            output_file: None,
            text: Rope::new(),
            dot: Position::default(),
            marks: [None; MAX_MARKS],
            margin_left: 0,
            margin_right: 79,
            height: DEFAULT_HEIGHT,
            modified: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_special(&self) -> bool {
        self.options.contains(FrameOptions::SPECIAL_FRAME)
    }

    pub fn space_limit(&self) -> usize {
        self.space_limit
    }

    pub fn space_used(&self) -> usize {
        self.text.len_chars()
    }

    pub fn space_left(&self) -> usize {
        self.space_limit
            .saturating_sub(EOP_OVERHEAD)
            .saturating_sub(self.space_used())
    }

    pub fn set_space_limit(&mut self, limit: usize) -> Result<()> {
        if limit < self.space_used() + EOP_OVERHEAD {
            return Err(FrameError::NoRoom);
        }
        self.space_limit = limit;
        Ok(())
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn dot(&self) -> Position {
        self.dot
    }

    pub fn set_dot(&mut self, pos: Position) -> Result<()> {
        if pos.line > self.line_count() || pos.col > MAX_COL {
            return Err(FrameError::Fail);
        }
        self.dot = pos;
        Ok(())
    }

    /// Number of real lines; the end-of-page line has index `line_count()`.
    pub fn line_count(&self) -> usize {
        self.text.len_lines() - 1
    }

    pub fn line_len(&self, line: usize) -> usize {
        if line >= self.line_count() {
            return 0;
        }
        self.text.line(line).len_chars() - 1
    }

    pub fn line_text(&self, line: usize) -> String {
        if line >= self.line_count() {
            return String::new();
        }
        let mut s = self.text.line(line).to_string();
        s.pop();
        s
    }

    pub fn text(&self) -> String {
        self.text.to_string()
    }

    /// Replaces the whole text; the dot goes to the top.
    pub fn load_text(&mut self, text: &str) -> Result<()> {
        let mut text = text.to_string();
        if !text.is_empty() && !text.ends_with('\n') {
            text.push('\n');
        }
        if text.chars().count() + EOP_OVERHEAD > self.space_limit {
            return Err(FrameError::NoRoom);
        }
        self.text = Rope::from_str(&text);
        self.dot = Position::default();
        self.marks = [None; MAX_MARKS];
        self.modified = false;
        Ok(())
    }

    pub fn visible_lines(&self, top: usize, height: usize) -> Vec<String> {
        (top..self.line_count().min(top + height))
            .map(|line| self.line_text(line))
            .collect()
    }

    // ==================== marks ====================

    pub fn mark(&self, n: usize) -> Option<Position> {
        n.checked_sub(1)
            .and_then(|i| self.marks.get(i).copied().flatten())
    }

    pub fn set_mark(&mut self, n: usize) -> Result<()> {
        let slot = n
            .checked_sub(1)
            .and_then(|i| self.marks.get_mut(i))
            .ok_or(FrameError::Fail)?;
        *slot = Some(self.dot);
        Ok(())
    }

    pub fn clear_mark(&mut self, n: usize) -> Result<()> {
        let slot = n
            .checked_sub(1)
            .and_then(|i| self.marks.get_mut(i))
            .ok_or(FrameError::Fail)?;
        *slot = None;
        Ok(())
    }

    // ==================== movement ====================

    pub fn advance(&mut self, n: i64) -> Result<()> {
        let line = offset(self.dot.line, n).ok_or(FrameError::Fail)?;
        if line > self.line_count() {
            return Err(FrameError::Fail);
        }
        self.dot = Position::new(line, 0);
        Ok(())
    }

    pub fn advance_to_end(&mut self, forwards: bool) {
        let line = if forwards { self.line_count() } else { 0 };
        self.dot = Position::new(line, 0);
    }

    /// Vertical move keeping the column.
    pub fn move_lines(&mut self, n: i64) -> Result<()> {
        let line = offset(self.dot.line, n).ok_or(FrameError::Fail)?;
        if line > self.line_count() {
            return Err(FrameError::Fail);
        }
        self.dot.line = line;
        Ok(())
    }

    pub fn jump(&mut self, n: i64) -> Result<()> {
        let col = offset(self.dot.col, n).ok_or(FrameError::Fail)?;
        if col > MAX_COL {
            return Err(FrameError::Fail);
        }
        self.dot.col = col;
        Ok(())
    }

    pub fn tab(&mut self, forwards: bool) -> Result<()> {
        let col = if forwards {
            (self.dot.col / TAB_WIDTH + 1) * TAB_WIDTH
        } else if self.dot.col == 0 {
            return Err(FrameError::Fail);
        } else {
            (self.dot.col - 1) / TAB_WIDTH * TAB_WIDTH
        };
        if col > MAX_COL {
            return Err(FrameError::Fail);
        }
        self.dot.col = col;
        Ok(())
    }

    /// Moves to the left margin of the next line, opening a new line at the
    /// end of page.
    pub fn return_line(&mut self) -> Result<()> {
        let next = self.dot.line + 1;
        if next > self.line_count() {
            self.materialize(self.dot.line)?;
        }
        self.dot = Position::new(next, self.margin_left);
        Ok(())
    }

    // ==================== predicates ====================

    pub fn at_eol(&self) -> bool {
        self.dot.col >= self.line_len(self.dot.line)
    }

    pub fn at_eop(&self) -> bool {
        self.dot.line >= self.line_count()
    }

    pub fn matches_at_dot(&self, pattern: &str, fold: bool) -> bool {
        let line: Vec<char> = self.line_text(self.dot.line).chars().collect();
        let pat: Vec<char> = pattern.chars().collect();
        let col = self.dot.col;
        if col + pat.len() > line.len() {
            return pat.iter().enumerate().all(|(i, &p)| {
                let c = line.get(col + i).copied().unwrap_or(' ');
                chars_eq(c, p, fold)
            });
        }
        pat.iter()
            .zip(&line[col..])
            .all(|(&p, &c)| chars_eq(c, p, fold))
    }

    // ==================== search ====================

    /// Finds the `n`th occurrence of `pattern` after (or before) the dot.
    /// Forward searches leave the dot after the match, backward ones at its
    /// start.
    pub fn get(&mut self, pattern: &str, forwards: bool, fold: bool) -> Result<()> {
        if pattern.is_empty() {
            return Err(FrameError::Fail);
        }
        let pat: Vec<char> = pattern.chars().collect();
        let found = if forwards {
            self.find_forward(&pat, self.dot, fold)
        } else {
            self.find_backward(&pat, self.dot, fold)
        }
        .ok_or(FrameError::Fail)?;
        self.dot = if forwards {
            Position::new(found.line, found.col + pat.len())
        } else {
            found
        };
        Ok(())
    }

    fn find_forward(&self, pat: &[char], from: Position, fold: bool) -> Option<Position> {
        for line in from.line..self.line_count() {
            let chars: Vec<char> = self.line_text(line).chars().collect();
            let start = if line == from.line { from.col } else { 0 };
            if let Some(col) = find_in(&chars, pat, start, fold) {
                return Some(Position::new(line, col));
            }
        }
        None
    }

    fn find_backward(&self, pat: &[char], from: Position, fold: bool) -> Option<Position> {
        let last = from.line.min(self.line_count().saturating_sub(1));
        if self.line_count() == 0 {
            return None;
        }
        for line in (0..=last).rev() {
            let chars: Vec<char> = self.line_text(line).chars().collect();
            let limit = if line == from.line {
                from.col.min(chars.len())
            } else {
                chars.len()
            };
            let hit = (0..limit)
                .rev()
                .find(|&col| col + pat.len() <= chars.len() && matches_at(&chars, pat, col, fold));
            if let Some(col) = hit {
                return Some(Position::new(line, col));
            }
        }
        None
    }

    /// Moves to the next character (after the dot) that is in `set`.
    /// Line ends count as spaces.
    pub fn next_in_set(&mut self, set: &str, forwards: bool) -> Result<()> {
        let mut pos = self.dot;
        loop {
            pos = self.step(pos, forwards).ok_or(FrameError::Fail)?;
            if set.contains(self.char_at(pos)) {
                self.dot = pos;
                return Ok(());
            }
        }
    }

    /// Skips over characters in `set`, stopping on the first one not in it.
    pub fn bridge(&mut self, set: &str, forwards: bool) -> Result<()> {
        let mut pos = self.dot;
        while set.contains(self.char_at(pos)) {
            pos = self.step(pos, forwards).ok_or(FrameError::Fail)?;
        }
        self.dot = pos;
        Ok(())
    }

    fn char_at(&self, pos: Position) -> char {
        if pos.line >= self.line_count() {
            return ' ';
        }
        let slice = self.text.line(pos.line);
        if pos.col + 1 < slice.len_chars() {
            slice.char(pos.col)
        } else {
            ' '
        }
    }

    fn step(&self, pos: Position, forwards: bool) -> Option<Position> {
        if forwards {
            if pos.col < self.line_len(pos.line) {
                Some(Position::new(pos.line, pos.col + 1))
            } else if pos.line < self.line_count() {
                Some(Position::new(pos.line + 1, 0))
            } else {
                None
            }
        } else if pos.col > 0 {
            Some(Position::new(pos.line, (pos.col - 1).min(self.line_len(pos.line))))
        } else if pos.line > 0 {
            Some(Position::new(pos.line - 1, self.line_len(pos.line - 1)))
        } else {
            None
        }
    }

    // ==================== text ====================

    fn writable(&self) -> Result<()> {
        if self.options.contains(FrameOptions::READ_ONLY) {
            return Err(FrameError::ReadOnly);
        }
        Ok(())
    }

    fn charge(&self, n: usize) -> Result<()> {
        if n > self.space_left() {
            return Err(FrameError::NoRoom);
        }
        Ok(())
    }

    /// Makes `line` a real line.
    fn materialize(&mut self, line: usize) -> Result<()> {
        let missing = (line + 1).saturating_sub(self.line_count());
        if missing == 0 {
            return Ok(());
        }
        self.charge(missing)?;
        let end = self.text.len_chars();
        self.text.insert(end, &"\n".repeat(missing));
        self.modified = true;
        Ok(())
    }

    /// Makes the dot's line long enough to reach the dot column.
    fn pad_to_dot(&mut self) -> Result<()> {
        self.materialize(self.dot.line)?;
        let len = self.line_len(self.dot.line);
        if len < self.dot.col {
            let pad = self.dot.col - len;
            self.charge(pad)?;
            let at = self.text.line_to_char(self.dot.line) + len;
            self.text.insert(at, &" ".repeat(pad));
        }
        Ok(())
    }

    fn dot_char_idx(&self) -> usize {
        self.text.line_to_char(self.dot.line) + self.dot.col
    }

    pub fn insert_text(&mut self, text: &str, copies: usize) -> Result<()> {
        self.writable()?;
        let total = text.chars().count() * copies;
        if total == 0 {
            return Ok(());
        }
        self.charge(total)?;
        let chunk = text.repeat(copies);
        // Whole lines dropped onto the null line need no padding line.
        if !(self.at_eop() && self.dot.col == 0 && chunk.ends_with('\n')) {
            self.pad_to_dot()?;
            self.charge(total)?;
        }
        let at = self.dot_char_idx();
        self.text.insert(at, &chunk);
        self.dot = self.position_of(at + total);
        self.modified = true;
        Ok(())
    }

    pub fn overtype_text(&mut self, text: &str, copies: usize) -> Result<()> {
        self.writable()?;
        for _ in 0..copies {
            for ch in text.chars() {
                if ch == '\n' {
                    self.return_line()?;
                    continue;
                }
                self.pad_to_dot()?;
                let at = self.dot_char_idx();
                if self.dot.col < self.line_len(self.dot.line) {
                    self.text.remove(at..at + 1);
                } else {
                    self.charge(1)?;
                }
                self.text.insert_char(at, ch);
                self.dot.col += 1;
                self.modified = true;
            }
        }
        Ok(())
    }

    fn position_of(&self, char_idx: usize) -> Position {
        let line = self.text.char_to_line(char_idx);
        Position::new(line, char_idx - self.text.line_to_char(line))
    }

    /// Inserts `n` blank lines above the dot; the dot moves to the first.
    pub fn insert_lines(&mut self, n: usize) -> Result<()> {
        self.writable()?;
        if n == 0 {
            return Ok(());
        }
        self.charge(n)?;
        let line = self.dot.line.min(self.line_count());
        let at = self.text.line_to_char(line);
        self.text.insert(at, &"\n".repeat(n));
        self.dot = Position::new(line, self.dot.col);
        self.modified = true;
        Ok(())
    }

    pub fn insert_spaces(&mut self, n: usize) -> Result<()> {
        self.writable()?;
        if self.dot.col < self.line_len(self.dot.line) {
            self.charge(n)?;
            let at = self.dot_char_idx();
            self.text.insert(at, &" ".repeat(n));
            self.modified = true;
        }
        Ok(())
    }

    /// Deletes `n` lines from the dot down (or `-n` lines above it) and
    /// returns the removed text.
    pub fn delete_lines(&mut self, n: i64) -> Result<String> {
        self.writable()?;
        let (first, last) = if n >= 0 {
            let last = self.dot.line + n as usize;
            if last > self.line_count() {
                return Err(FrameError::Fail);
            }
            (self.dot.line, last)
        } else {
            let k = n.unsigned_abs() as usize;
            if k > self.dot.line {
                return Err(FrameError::Fail);
            }
            (self.dot.line - k, self.dot.line)
        };
        let start = self.text.line_to_char(first);
        let end = self.text.line_to_char(last);
        let removed = self.text.slice(start..end).to_string();
        self.text.remove(start..end);
        self.dot = Position::new(first, self.dot.col);
        if !removed.is_empty() {
            self.modified = true;
        }
        Ok(removed)
    }

    /// Deletes through the line holding mark `m`, inclusive of the dot line.
    pub fn delete_to_mark(&mut self, m: usize) -> Result<String> {
        let mark = self.mark(m).ok_or(FrameError::Fail)?;
        let n = mark.line as i64 - self.dot.line as i64;
        if n >= 0 {
            self.delete_lines((n + 1).min((self.line_count() - self.dot.line) as i64))
        } else {
            let saved = self.dot;
            let count = (saved.line - mark.line + 1).min(self.line_count() - mark.line);
            self.dot = Position::new(mark.line, saved.col);
            let removed = self.delete_lines(count as i64);
            if removed.is_err() {
                self.dot = saved;
            }
            removed
        }
    }

    pub fn delete_chars(&mut self, n: i64) -> Result<String> {
        self.writable()?;
        let len = self.line_len(self.dot.line);
        let (from, to) = if n >= 0 {
            let to = self.dot.col + n as usize;
            if to > len.max(self.dot.col) {
                return Err(FrameError::Fail);
            }
            (self.dot.col, to)
        } else {
            let k = n.unsigned_abs() as usize;
            if k > self.dot.col || self.dot.col > len {
                return Err(FrameError::Fail);
            }
            (self.dot.col - k, self.dot.col)
        };
        if from == to {
            return Ok(String::new());
        }
        let base = self.text.line_to_char(self.dot.line);
        let removed = self.text.slice(base + from..base + to).to_string();
        self.text.remove(base + from..base + to);
        self.dot.col = from;
        self.modified = true;
        Ok(removed)
    }

    pub fn rubout(&mut self, insert_mode: bool) -> Result<()> {
        self.writable()?;
        if self.dot.col == 0 {
            return Err(FrameError::Fail);
        }
        self.dot.col -= 1;
        if self.dot.col < self.line_len(self.dot.line) {
            let at = self.dot_char_idx();
            self.text.remove(at..at + 1);
            if !insert_mode {
                self.text.insert_char(at, ' ');
            }
            self.modified = true;
        }
        Ok(())
    }

    /// Swaps the dot line with the one below; the dot follows its line.
    pub fn swap_line(&mut self, down: bool) -> Result<()> {
        self.writable()?;
        let line = self.dot.line;
        let other = if down { line + 1 } else { line.checked_sub(1).ok_or(FrameError::Fail)? };
        if line >= self.line_count() || other >= self.line_count() {
            return Err(FrameError::Fail);
        }
        let (upper, lower) = (line.min(other), line.max(other));
        let upper_text = self.line_text(upper);
        let lower_text = self.line_text(lower);
        let start = self.text.line_to_char(upper);
        let end = self.text.line_to_char(lower + 1);
        self.text.remove(start..end);
        self.text
            .insert(start, &format!("{}\n{}\n", lower_text, upper_text));
        self.dot.line = other;
        self.modified = true;
        Ok(())
    }

    pub fn split_line(&mut self) -> Result<()> {
        self.writable()?;
        self.charge(1)?;
        self.materialize(self.dot.line)?;
        let len = self.line_len(self.dot.line);
        let at = self.text.line_to_char(self.dot.line) + self.dot.col.min(len);
        self.text.insert_char(at, '\n');
        self.dot = Position::new(self.dot.line + 1, 0);
        self.modified = true;
        Ok(())
    }

    /// Copies the character above (or below) the dot onto the dot.
    pub fn ditto(&mut self, from_above: bool) -> Result<()> {
        let source = if from_above {
            self.dot.line.checked_sub(1).ok_or(FrameError::Fail)?
        } else {
            self.dot.line + 1
        };
        if source >= self.line_count() || self.dot.col >= self.line_len(source) {
            return Err(FrameError::Fail);
        }
        let ch = self.text.line(source).char(self.dot.col);
        self.overtype_text(&ch.to_string(), 1)
    }

    pub fn change_case(&mut self, change: CaseChange, forwards: bool) -> Result<()> {
        self.writable()?;
        if !forwards {
            if self.dot.col == 0 {
                return Err(FrameError::Fail);
            }
            self.dot.col -= 1;
        }
        if self.dot.col >= self.line_len(self.dot.line) {
            return Err(FrameError::Fail);
        }
        let at = self.dot_char_idx();
        let ch = self.text.char(at);
        let word_start = self.dot.col == 0 || !self.text.char(at - 1).is_alphanumeric();
        let new = match change {
            CaseChange::Up => ch.to_ascii_uppercase(),
            CaseChange::Low => ch.to_ascii_lowercase(),
            CaseChange::Edit if word_start => ch.to_ascii_uppercase(),
            CaseChange::Edit => ch.to_ascii_lowercase(),
        };
        if new != ch {
            self.text.remove(at..at + 1);
            self.text.insert_char(at, new);
            self.modified = true;
        }
        if forwards {
            self.dot.col += 1;
        }
        Ok(())
    }

    /// Moves to the start of the next (or previous) word.
    pub fn word_advance(&mut self, forwards: bool) -> Result<()> {
        let mut pos = self.dot;
        if forwards {
            while !self.char_at(pos).is_whitespace() {
                pos = self.step(pos, true).ok_or(FrameError::Fail)?;
            }
            while self.char_at(pos).is_whitespace() {
                pos = self.step(pos, true).ok_or(FrameError::Fail)?;
            }
        } else {
            pos = self.step(pos, false).ok_or(FrameError::Fail)?;
            while self.char_at(pos).is_whitespace() {
                pos = self.step(pos, false).ok_or(FrameError::Fail)?;
            }
            while let Some(prev) = self.step(pos, false) {
                if self.char_at(prev).is_whitespace() || prev.line != pos.line {
                    break;
                }
                pos = prev;
            }
        }
        self.dot = pos;
        Ok(())
    }

    /// Deletes from the dot to the start of the next word on the same line.
    pub fn word_delete(&mut self) -> Result<String> {
        let start = self.dot;
        self.word_advance(true)?;
        let end = self.dot;
        self.dot = start;
        let count = if end.line == start.line {
            end.col - start.col
        } else {
            self.line_len(start.line).saturating_sub(start.col)
        };
        if count == 0 {
            return Err(FrameError::Fail);
        }
        self.delete_chars(count as i64)
    }

    pub fn replace(&mut self, old: &str, new: &str, forwards: bool, fold: bool) -> Result<()> {
        self.writable()?;
        if old.is_empty() {
            return Err(FrameError::Fail);
        }
        let pat: Vec<char> = old.chars().collect();
        let found = if forwards {
            self.find_forward(&pat, self.dot, fold)
        } else {
            self.find_backward(&pat, self.dot, fold)
        }
        .ok_or(FrameError::Fail)?;
        let new_len = new.chars().count();
        if new_len > pat.len() {
            self.charge(new_len - pat.len())?;
        }
        let at = self.text.line_to_char(found.line) + found.col;
        self.text.remove(at..at + pat.len());
        self.text.insert(at, new);
        self.dot = self.position_of(at + if forwards { new_len } else { 0 });
        self.modified = true;
        Ok(())
    }

    /// Re-aligns the dot line between the margins and advances.
    pub fn align_line(&mut self, align: Align) -> Result<()> {
        self.writable()?;
        if self.dot.line >= self.line_count() {
            return Err(FrameError::Fail);
        }
        let text = self.line_text(self.dot.line);
        let body = text.trim();
        let width = body.chars().count();
        let indent = match align {
            Align::Left => self.margin_left,
            Align::Right => (self.margin_right + 1).saturating_sub(width),
            Align::Centre => {
                let span = (self.margin_right + 1).saturating_sub(self.margin_left);
                self.margin_left + span.saturating_sub(width) / 2
            }
        };
        let aligned = format!("{}{}", " ".repeat(indent), body);
        let old_len = text.chars().count();
        let new_len = aligned.chars().count();
        if new_len > old_len {
            self.charge(new_len - old_len)?;
        }
        let start = self.text.line_to_char(self.dot.line);
        self.text.remove(start..start + old_len);
        self.text.insert(start, &aligned);
        self.dot = Position::new(self.dot.line + 1, 0);
        self.modified = true;
        Ok(())
    }

    /// Checks the structural invariants; returns a description of the first
    /// violation.
    pub fn validate(&self) -> std::result::Result<(), String> {
        let len = self.text.len_chars();
        if len > 0 && self.text.char(len - 1) != '\n' {
            return Err(format!("{}: text not newline terminated", self.name));
        }
        if self.space_used() + EOP_OVERHEAD > self.space_limit {
            return Err(format!("{}: space limit exceeded", self.name));
        }
        if self.dot.line > self.line_count() || self.dot.col > MAX_COL {
            return Err(format!("{}: dot out of range", self.name));
        }
        Ok(())
    }

    pub fn dump(&self) -> String {
        format!(
            "{} lines={} dot={}:{} limit={} left={} options={:?} in={:?} out={:?}",
            self.name,
            self.line_count(),
            self.dot.line + 1,
            self.dot.col + 1,
            self.space_limit,
            self.space_left(),
            self.options,
            self.input_file,
            self.output_file,
        )
    }
}

fn offset(base: usize, n: i64) -> Option<usize> {
    if n >= 0 {
        base.checked_add(n as usize)
    } else {
        base.checked_sub(n.unsigned_abs() as usize)
    }
}

fn chars_eq(a: char, b: char, fold: bool) -> bool {
    if fold {
        a.to_ascii_lowercase() == b.to_ascii_lowercase()
    } else {
        a == b
    }
}

fn matches_at(hay: &[char], pat: &[char], at: usize, fold: bool) -> bool {
    hay[at..at + pat.len()]
        .iter()
        .zip(pat)
        .all(|(&h, &p)| chars_eq(h, p, fold))
}

fn find_in(hay: &[char], pat: &[char], start: usize, fold: bool) -> Option<usize> {
    if pat.len() > hay.len() {
        return None;
    }
    (start..=hay.len() - pat.len()).find(|&at| matches_at(hay, pat, at, fold))
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/frame.rs"]
mod tests;
