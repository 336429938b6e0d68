//! Dispatch kernel: keymap, command reader, executor, frames and files,
//! gathered behind the `Editor` context.

pub mod code;
pub mod dispatch;
pub mod editor;
pub mod executor;
pub mod files;
pub mod frame;
pub mod frames;
pub mod immediate;
pub mod keymap;
pub mod mode;
pub mod reader;
pub mod services;
pub mod startup;

pub use code::{compile, CodeArena, CodeId, Instruction};
pub use dispatch::{Dispatch, PrefixDispatcher};
pub use editor::Editor;
pub use files::{FileData, FileError, FileTable};
pub use frame::{Frame, FrameError, FrameOptions, Position};
pub use frames::{FrameId, FrameRegistry};
pub use immediate::LoopExit;
pub use keymap::{Dialect, Keymap};
pub use mode::{AbortFlag, EditMode, ExitRequest, ModeState};
pub use reader::{CommandReader, ReadError, ReadOutcome};
pub use startup::{start_up, StartupError, FILE_NAME_LEN};
