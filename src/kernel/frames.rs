//! Frame registry: named frames, the current frame and the return stack.

use compact_str::CompactString;
use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};

use super::frame::{Frame, FrameError, FrameOptions, Position, Result, MAX_SPACE};

new_key_type! { pub struct FrameId; }

pub const OOPS: &str = "OOPS";
pub const COMMAND: &str = "COMMAND";
pub const HEAP: &str = "HEAP";
pub const DEFAULT_FRAME: &str = "LUDWIG";

fn key(name: &str) -> CompactString {
    CompactString::from(name.trim().to_ascii_uppercase())
}

#[derive(Debug, Clone)]
pub struct FrameRegistry {
    arena: SlotMap<FrameId, Frame>,
    by_name: FxHashMap<CompactString, FrameId>,
    current: Option<FrameId>,
    return_stack: Vec<FrameId>,
    default_space: usize,
    oops: Option<FrameId>,
    command: Option<FrameId>,
    heap: Option<FrameId>,
}

impl FrameRegistry {
    pub fn new(default_space: usize) -> Self {
        Self {
            arena: SlotMap::with_key(),
            by_name: FxHashMap::default(),
            current: None,
            return_stack: Vec::new(),
            default_space,
            oops: None,
            command: None,
            heap: None,
        }
    }

    pub fn default_space(&self) -> usize {
        self.default_space
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Creates `OOPS`, `COMMAND` and `HEAP` in that order, flagged special.
    pub fn create_mandatory(&mut self) -> Result<()> {
        let oops = self.create(OOPS, MAX_SPACE)?;
        let command = self.create(COMMAND, self.default_space)?;
        let heap = self.create(HEAP, self.default_space)?;
        for id in [oops, command, heap] {
            self.arena[id].options.insert(FrameOptions::SPECIAL_FRAME);
        }
        self.oops = Some(oops);
        self.command = Some(command);
        self.heap = Some(heap);
        Ok(())
    }

    fn create(&mut self, name: &str, space: usize) -> Result<FrameId> {
        let name = key(name);
        if name.is_empty() {
            return Err(FrameError::Fail);
        }
        if self.by_name.contains_key(&name) {
            return Err(FrameError::Exists(name.to_string()));
        }
        let id = self.arena.insert(Frame::new(&name, space));
        self.by_name.insert(name.clone(), id);
        tracing::debug!(frame = %name, space, "frame created");
        Ok(id)
    }

    pub fn find(&self, name: &str) -> Option<FrameId> {
        self.by_name.get(&key(name)).copied()
    }

    pub fn get(&self, id: FrameId) -> Option<&Frame> {
        self.arena.get(id)
    }

    pub fn get_mut(&mut self, id: FrameId) -> Option<&mut Frame> {
        self.arena.get_mut(id)
    }

    pub fn by_name(&self, name: &str) -> Option<&Frame> {
        self.find(name).and_then(|id| self.arena.get(id))
    }

    pub fn current_id(&self) -> Option<FrameId> {
        self.current
    }

    pub fn current(&self) -> Option<&Frame> {
        self.current.and_then(|id| self.arena.get(id))
    }

    pub fn current_mut(&mut self) -> Option<&mut Frame> {
        self.current.and_then(|id| self.arena.get_mut(id))
    }

    pub fn oops_id(&self) -> Option<FrameId> {
        self.oops
    }

    pub fn command_id(&self) -> Option<FrameId> {
        self.command
    }

    pub fn heap_id(&self) -> Option<FrameId> {
        self.heap
    }

    /// Makes `name` current, creating it when it does not exist. The frame
    /// left behind goes onto the return stack.
    pub fn edit(&mut self, name: &str) -> Result<FrameId> {
        let id = match self.find(name) {
            Some(id) => id,
            None => self.create(name, self.default_space)?,
        };
        self.switch_to(id);
        Ok(id)
    }

    pub fn switch_to(&mut self, id: FrameId) {
        if let Some(previous) = self.current {
            if previous != id {
                self.return_stack.push(previous);
            }
        }
        self.current = Some(id);
    }

    /// Goes back to the frame that was current before the last switch.
    pub fn frame_return(&mut self) -> Result<FrameId> {
        while let Some(id) = self.return_stack.pop() {
            if self.arena.contains_key(id) && Some(id) != self.current {
                self.current = Some(id);
                return Ok(id);
            }
        }
        Err(FrameError::Fail)
    }

    pub fn kill(&mut self, name: &str) -> Result<()> {
        let name = key(name);
        let id = *self
            .by_name
            .get(&name)
            .ok_or_else(|| FrameError::NotFound(name.to_string()))?;
        if self.arena[id].is_special() {
            return Err(FrameError::Special(name.to_string()));
        }
        if self.current == Some(id) {
            return Err(FrameError::Current(name.to_string()));
        }
        self.arena.remove(id);
        self.by_name.remove(&name);
        self.return_stack.retain(|&r| r != id);
        tracing::debug!(frame = %name, "frame killed");
        Ok(())
    }

    pub fn set_height(&mut self, id: FrameId, height: u16) -> Result<()> {
        let frame = self.arena.get_mut(id).ok_or(FrameError::Fail)?;
        if height == 0 {
            return Err(FrameError::Fail);
        }
        frame.height = height;
        Ok(())
    }

    /// Replaces the options of a frame. `SPECIAL_FRAME` can be neither
    /// granted nor removed here.
    pub fn set_options(&mut self, id: FrameId, options: FrameOptions) -> Result<()> {
        let frame = self.arena.get_mut(id).ok_or(FrameError::Fail)?;
        let special = frame.options & FrameOptions::SPECIAL_FRAME;
        frame.options = (options - FrameOptions::SPECIAL_FRAME) | special;
        Ok(())
    }

    pub fn attach_file(&mut self, id: FrameId, slot: usize, output: bool) -> Result<()> {
        let frame = self.arena.get_mut(id).ok_or(FrameError::Fail)?;
        if output {
            frame.output_file = Some(slot);
        } else {
            frame.input_file = Some(slot);
        }
        Ok(())
    }

    /// Appends deleted text to `OOPS`; dropped when `OOPS` is full.
    pub fn save_to_oops(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let Some(oops) = self.oops.and_then(|id| self.arena.get_mut(id)) else {
            return;
        };
        let dot = oops.dot();
        let end = Position::new(oops.line_count(), 0);
        let saved = oops
            .set_dot(end)
            .and_then(|_| oops.insert_text(text, 1));
        if let Err(error) = saved {
            tracing::warn!(%error, "OOPS full, deleted text discarded");
        }
        let _ = oops.set_dot(dot);
    }

    pub fn iter(&self) -> impl Iterator<Item = (FrameId, &Frame)> {
        self.arena.iter()
    }

    pub fn validate(&self) -> std::result::Result<(), String> {
        for name in [OOPS, COMMAND, HEAP] {
            match self.by_name(name) {
                Some(frame) if frame.is_special() => {}
                Some(_) => return Err(format!("{} is not flagged special", name)),
                None => return Err(format!("{} is missing", name)),
            }
        }
        if let Some(id) = self.current {
            if !self.arena.contains_key(id) {
                return Err("current frame does not exist".to_string());
            }
        }
        for (name, &id) in &self.by_name {
            match self.arena.get(id) {
                Some(frame) if frame.name() == name.as_str() => frame.validate()?,
                _ => return Err(format!("{}: name index out of date", name)),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/frames.rs"]
mod tests;
