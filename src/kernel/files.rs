//! Files: command line parsing, the file table, page load and close.
//!
//! Files are read whole into their frame when opened and written whole from
//! it when closed. Bytes map one to one onto Latin-1 characters.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::event::{byte_to_char, char_to_byte};

use super::frame::{Frame, FrameError};
use super::frames::FrameId;
use super::startup::StartupError;

pub const MAX_FILES: usize = 100;
pub const INPUT_SLOT: usize = 1;
pub const OUTPUT_SLOT: usize = 2;

#[derive(Debug)]
pub enum FileError {
    NotFound(PathBuf),
    Io { path: PathBuf, source: io::Error },
    TooBig { path: PathBuf, size: usize, limit: usize },
    NoSlot,
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            FileError::Io { path, source } => write!(f, "{}: {}", path.display(), source),
            FileError::TooBig { path, size, limit } => write!(
                f,
                "{} is too big for its frame ({} > {})",
                path.display(),
                size,
                limit
            ),
            FileError::NoSlot => write!(f, "No free file slots"),
        }
    }
}

impl std::error::Error for FileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FileError>;

/// Options and file names taken from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileData {
    /// `-O` / `-N`; `None` when neither was given.
    pub old_cmds: Option<bool>,
    pub create: bool,
    pub read_only: bool,
    pub batch: bool,
    pub initial_file: Option<String>,
    pub space: Option<usize>,
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

impl FileData {
    pub fn parse(command_line: &str) -> std::result::Result<Self, StartupError> {
        let mut data = FileData::default();
        let mut words = command_line.split_whitespace();
        let mut files = Vec::new();

        while let Some(word) = words.next() {
            match word {
                "-O" => data.old_cmds = Some(true),
                "-N" => data.old_cmds = Some(false),
                "-c" => data.create = true,
                "-r" => data.read_only = true,
                "-b" => data.batch = true,
                "-i" => {
                    let file = words
                        .next()
                        .ok_or_else(|| StartupError::InvalidOption(word.to_string()))?;
                    data.initial_file = Some(file.to_string());
                }
                "-s" => {
                    let space = words
                        .next()
                        .and_then(|n| n.parse::<usize>().ok())
                        .ok_or_else(|| StartupError::InvalidOption(word.to_string()))?;
                    data.space = Some(space);
                }
                _ if word.starts_with('-') && word.len() > 1 => {
                    return Err(StartupError::InvalidOption(word.to_string()));
                }
                _ => files.push(PathBuf::from(word)),
            }
        }

        if files.len() > 2 {
            return Err(StartupError::TooManyFiles);
        }
        let mut files = files.into_iter();
        data.input = files.next();
        data.output = files.next();
        if data.output.is_none() && !data.read_only {
            data.output = data.input.clone();
        }
        if data.read_only {
            data.output = None;
        }
        Ok(data)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSlot {
    pub path: PathBuf,
    pub output: bool,
    /// Input only: a missing file reads as empty.
    pub create: bool,
    pub frame: Option<FrameId>,
}

/// Open files by 1-based slot number.
#[derive(Debug, Clone)]
pub struct FileTable {
    slots: Vec<Option<FileSlot>>,
}

impl Default for FileTable {
    fn default() -> Self {
        Self::new()
    }
}

impl FileTable {
    pub fn new() -> Self {
        Self {
            slots: vec![None; MAX_FILES + 1],
        }
    }

    fn free_slot(&self) -> Result<usize> {
        (1..=MAX_FILES)
            .find(|&slot| self.slots[slot].is_none())
            .ok_or(FileError::NoSlot)
    }

    pub fn open_input(&mut self, path: &Path, create: bool) -> Result<usize> {
        if !create && !path.is_file() {
            return Err(FileError::NotFound(path.to_path_buf()));
        }
        let slot = self.free_slot()?;
        self.slots[slot] = Some(FileSlot {
            path: path.to_path_buf(),
            output: false,
            create,
            frame: None,
        });
        Ok(slot)
    }

    pub fn open_output(&mut self, path: &Path) -> Result<usize> {
        let slot = self.free_slot()?;
        self.slots[slot] = Some(FileSlot {
            path: path.to_path_buf(),
            output: true,
            create: true,
            frame: None,
        });
        Ok(slot)
    }

    pub fn get(&self, slot: usize) -> Option<&FileSlot> {
        self.slots.get(slot)?.as_ref()
    }

    /// Records which frame a slot feeds or drains.
    pub fn set_frame(&mut self, slot: usize, frame: FrameId) {
        if let Some(Some(file)) = self.slots.get_mut(slot) {
            file.frame = Some(frame);
        }
    }

    pub fn close(&mut self, slot: usize) -> Option<FileSlot> {
        self.slots.get_mut(slot)?.take()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &FileSlot)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(slot, file)| file.as_ref().map(|f| (slot, f)))
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Opens the files named on the command line: input in slot 1, output in
/// slot 2.
pub fn file_create_open(
    data: &FileData,
    table: &mut FileTable,
) -> Result<(Option<usize>, Option<usize>)> {
    let input = match &data.input {
        Some(path) => Some(table.open_input(path, data.create)?),
        None => None,
    };
    let output = match &data.output {
        Some(path) => Some(table.open_output(path)?),
        None => None,
    };
    Ok((input, output))
}

pub fn read_latin1(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => FileError::NotFound(path.to_path_buf()),
        _ => FileError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    Ok(bytes
        .iter()
        .filter(|&&b| b != b'\r')
        .map(|&b| byte_to_char(b))
        .collect())
}

pub fn write_latin1(path: &Path, text: &str) -> Result<()> {
    let bytes: Vec<u8> = text.chars().map(char_to_byte).collect();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|source| FileError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    fs::write(path, bytes).map_err(|source| FileError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads the whole of an input slot into `frame`.
pub fn page_load(table: &FileTable, slot: usize, frame: &mut Frame) -> Result<()> {
    let file = table.get(slot).ok_or(FileError::NoSlot)?;
    let text = match read_latin1(&file.path) {
        Ok(text) => text,
        Err(FileError::NotFound(_)) if file.create => String::new(),
        Err(e) => return Err(e),
    };
    let size = text.chars().count();
    frame.load_text(&text).map_err(|e| match e {
        FrameError::NoRoom => FileError::TooBig {
            path: file.path.clone(),
            size,
            limit: frame.space_limit(),
        },
        _ => FileError::Io {
            path: file.path.clone(),
            source: io::Error::new(io::ErrorKind::Other, e.to_string()),
        },
    })?;
    tracing::info!(path = %file.path.display(), lines = frame.line_count(), "file loaded");
    Ok(())
}

/// Closes every file. With `save`, each output file is written from the
/// frame it is attached to.
pub fn quit_close_files<'a>(
    table: &mut FileTable,
    frame_of: impl Fn(FrameId) -> Option<&'a Frame>,
    save: bool,
) -> Vec<FileError> {
    let mut errors = Vec::new();
    for slot in 1..=MAX_FILES {
        let Some(file) = table.close(slot) else {
            continue;
        };
        if !save || !file.output {
            continue;
        }
        let Some(frame) = file.frame.and_then(&frame_of) else {
            continue;
        };
        match write_latin1(&file.path, &frame.text()) {
            Ok(()) => tracing::info!(path = %file.path.display(), "file written"),
            Err(e) => {
                tracing::warn!(error = %e, "write failed at close");
                errors.push(e);
            }
        }
    }
    errors
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/files.rs"]
mod tests;
