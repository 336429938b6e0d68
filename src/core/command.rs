//! Editor verbs and the policy attached to each of them.
//!
//! Prefix tags only ever live in the keymap: they select a section of the
//! expanded keymap and never reach a command body.

use bitflags::bitflags;

use super::param::LeadParam;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prefix {
    Ast,
    A,
    B,
    C,
    D,
    E,
    Eo,
    Eq,
    F,
    Fg,
    I,
    K,
    L,
    O,
    P,
    S,
    T,
    Tc,
    Tf,
    U,
    W,
    X,
    Y,
    Z,
    Tilde,
}

impl Prefix {
    pub const COUNT: usize = 25;

    /// Section order of the expanded keymap.
    pub const ALL: [Prefix; Prefix::COUNT] = [
        Prefix::Ast,
        Prefix::A,
        Prefix::B,
        Prefix::C,
        Prefix::D,
        Prefix::E,
        Prefix::Eo,
        Prefix::Eq,
        Prefix::F,
        Prefix::Fg,
        Prefix::I,
        Prefix::K,
        Prefix::L,
        Prefix::O,
        Prefix::P,
        Prefix::S,
        Prefix::T,
        Prefix::Tc,
        Prefix::Tf,
        Prefix::U,
        Prefix::W,
        Prefix::X,
        Prefix::Y,
        Prefix::Z,
        Prefix::Tilde,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Noop,

    // movement
    Up,
    Down,
    Left,
    Right,
    Home,
    Return,
    Tab,
    Backtab,
    Rubout,
    Jump,
    Advance,
    PositionColumn,
    PositionLine,
    OpSysCommand,

    // window
    WindowForward,
    WindowBackward,
    WindowLeft,
    WindowRight,
    WindowScroll,
    WindowTop,
    WindowEnd,
    WindowNew,
    WindowMiddle,
    WindowSetHeight,
    WindowUpdate,

    // search and predicates
    Get,
    Next,
    Bridge,
    Replace,
    EqualString,
    EqualColumn,
    EqualMark,
    EqualEol,
    EqualEop,
    EqualEof,

    // text
    OvertypeMode,
    InsertMode,
    OvertypeText,
    InsertText,
    TypeText,
    InsertLine,
    InsertChar,
    InsertInvisible,
    DeleteLine,
    DeleteChar,
    SwapLine,
    SplitLine,
    DittoUp,
    DittoDown,
    CaseUp,
    CaseLow,
    CaseEdit,
    SetMarginLeft,
    SetMarginRight,
    LineFill,
    LineJustify,
    LineSquash,
    LineCentre,
    LineLeft,
    LineRight,
    WordAdvance,
    WordDelete,
    AdvanceParagraph,
    DeleteParagraph,

    // spans and blocks
    SpanDefine,
    SpanTransfer,
    SpanCopy,
    SpanCompile,
    SpanJump,
    SpanIndex,
    SpanAssign,
    SpanExecute,
    SpanExecuteNoRecompile,
    BlockDefine,
    BlockTransfer,
    BlockCopy,

    // frames
    FrameKill,
    FrameEdit,
    FrameReturn,
    FrameParameters,

    // files
    FileInput,
    FileOutput,
    FileEdit,
    FileRead,
    FileWrite,
    FileClose,
    FileRewind,
    FileKill,
    FileExecute,
    FileSave,
    FileTable,
    FileGlobalInput,
    FileGlobalOutput,
    FileGlobalRewind,
    FileGlobalKill,

    // user
    UserCommandIntroducer,
    UserKey,
    UserParent,
    UserSubprocess,
    UserUndo,
    UserLearn,
    UserRecall,

    // misc
    ResizeWindow,
    Help,
    Verify,
    Mark,
    Page,
    Quit,
    Dump,
    Validate,
    ExecuteString,
    DoLastCommand,
    Extended,

    // exits
    ExitAbort,
    ExitFail,
    ExitSuccess,

    Prefix(Prefix),
    NoSuch,
}

bitflags! {
    /// Leading parameter forms a command accepts.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct LeadAllow: u8 {
        const NONE = 0b0000_0001;
        const PLUS = 0b0000_0010;
        const MINUS = 0b0000_0100;
        const PINT = 0b0000_1000;
        const NINT = 0b0001_0000;
        const PINDEF = 0b0010_0000;
        const NINDEF = 0b0100_0000;
        const MARKER = 0b1000_0000;

        const SIGNED = Self::NONE.bits() | Self::PLUS.bits() | Self::MINUS.bits()
            | Self::PINT.bits() | Self::NINT.bits();
        const ANY_COUNT = Self::SIGNED.bits() | Self::PINDEF.bits() | Self::NINDEF.bits();
        const FORWARD = Self::NONE.bits() | Self::PLUS.bits() | Self::PINT.bits()
            | Self::PINDEF.bits();
        const ONLY_NONE = Self::NONE.bits();
        const SIGN_ONLY = Self::NONE.bits() | Self::PLUS.bits() | Self::MINUS.bits();
    }
}

impl LeadAllow {
    pub fn permits(self, lead: LeadParam) -> bool {
        let bit = match lead {
            LeadParam::None => LeadAllow::NONE,
            LeadParam::Plus => LeadAllow::PLUS,
            LeadParam::Minus => LeadAllow::MINUS,
            LeadParam::Pint => LeadAllow::PINT,
            LeadParam::Nint => LeadAllow::NINT,
            LeadParam::Pindef => LeadAllow::PINDEF,
            LeadParam::Nindef => LeadAllow::NINDEF,
            LeadParam::Marker => LeadAllow::MARKER,
        };
        self.contains(bit)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CmdAttrib {
    pub lead: LeadAllow,
    /// Number of delimited trailing parameters.
    pub tpar_count: u8,
    /// The count repeats the whole body rather than being an argument to it.
    pub repeat: bool,
}

impl CmdAttrib {
    const fn new(lead: LeadAllow, tpar_count: u8, repeat: bool) -> Self {
        Self {
            lead,
            tpar_count,
            repeat,
        }
    }
}

impl Command {
    pub fn is_prefix(self) -> bool {
        matches!(self, Command::Prefix(_))
    }

    pub fn as_prefix(self) -> Option<Prefix> {
        match self {
            Command::Prefix(p) => Some(p),
            _ => None,
        }
    }

    pub fn is_exit(self) -> bool {
        matches!(
            self,
            Command::ExitAbort | Command::ExitFail | Command::ExitSuccess | Command::Quit
        )
    }

    pub fn attrib(self) -> CmdAttrib {
        use Command::*;
        match self {
            Up | Down | Left | Right | Rubout | Advance | DeleteChar | InsertLine
            | InsertChar | WindowForward | WindowBackward | WindowScroll | WindowLeft
            | WindowRight | AdvanceParagraph | DeleteParagraph => {
                CmdAttrib::new(LeadAllow::ANY_COUNT, 0, false)
            }
            Jump | DeleteLine => {
                CmdAttrib::new(LeadAllow::ANY_COUNT | LeadAllow::MARKER, 0, false)
            }
            Tab | Backtab | Return | SwapLine | DittoUp | DittoDown | CaseUp | CaseLow
            | CaseEdit | WordAdvance | WordDelete => CmdAttrib::new(LeadAllow::ANY_COUNT, 0, true),
            PositionColumn | PositionLine | WindowSetHeight => {
                CmdAttrib::new(LeadAllow::NONE | LeadAllow::PINT, 0, false)
            }
            Mark => CmdAttrib::new(
                LeadAllow::NONE | LeadAllow::MINUS | LeadAllow::PINT | LeadAllow::NINT,
                0,
                false,
            ),
            Get | Next | Bridge => CmdAttrib::new(LeadAllow::SIGNED, 1, true),
            Replace => CmdAttrib::new(LeadAllow::ANY_COUNT, 2, true),
            InsertText | OvertypeText | TypeText | InsertInvisible => {
                CmdAttrib::new(LeadAllow::NONE | LeadAllow::PINT, 1, true)
            }
            EqualString => CmdAttrib::new(LeadAllow::SIGN_ONLY, 1, false),
            EqualEol | EqualEop | EqualEof => CmdAttrib::new(LeadAllow::SIGN_ONLY, 0, false),
            EqualColumn => CmdAttrib::new(LeadAllow::SIGN_ONLY | LeadAllow::PINT, 0, false),
            EqualMark => CmdAttrib::new(
                LeadAllow::SIGN_ONLY | LeadAllow::PINT | LeadAllow::MARKER,
                0,
                false,
            ),
            SetMarginLeft | SetMarginRight => {
                CmdAttrib::new(LeadAllow::NONE | LeadAllow::PINT | LeadAllow::MINUS, 0, false)
            }
            LineFill | LineJustify | LineSquash | LineCentre | LineLeft | LineRight => {
                CmdAttrib::new(LeadAllow::FORWARD, 0, true)
            }
            FrameKill | FrameEdit | FrameParameters | FileInput | FileOutput | FileEdit
            | FileRead | FileExecute | FileGlobalInput | FileGlobalOutput | SpanDefine
            | SpanTransfer | SpanCopy | SpanCompile | SpanJump | SpanExecute
            | SpanExecuteNoRecompile | OpSysCommand | ExecuteString | UserCommandIntroducer
            | Help | Verify => CmdAttrib::new(LeadAllow::ONLY_NONE, 1, false),
            SpanAssign | UserKey => CmdAttrib::new(LeadAllow::ONLY_NONE, 2, false),
            FileWrite | Page => CmdAttrib::new(LeadAllow::FORWARD, 0, false),
            _ => CmdAttrib::new(LeadAllow::ONLY_NONE, 0, false),
        }
    }

    pub fn name(self) -> &'static str {
        use Command::*;
        match self {
            Noop => "noop",
            Up => "up",
            Down => "down",
            Left => "left",
            Right => "right",
            Home => "home",
            Return => "return",
            Tab => "tab",
            Backtab => "backtab",
            Rubout => "rubout",
            Jump => "jump",
            Advance => "advance",
            PositionColumn => "position_column",
            PositionLine => "position_line",
            OpSysCommand => "op_sys_command",
            WindowForward => "window_forward",
            WindowBackward => "window_backward",
            WindowLeft => "window_left",
            WindowRight => "window_right",
            WindowScroll => "window_scroll",
            WindowTop => "window_top",
            WindowEnd => "window_end",
            WindowNew => "window_new",
            WindowMiddle => "window_middle",
            WindowSetHeight => "window_setheight",
            WindowUpdate => "window_update",
            Get => "get",
            Next => "next",
            Bridge => "bridge",
            Replace => "replace",
            EqualString => "equal_string",
            EqualColumn => "equal_column",
            EqualMark => "equal_mark",
            EqualEol => "equal_eol",
            EqualEop => "equal_eop",
            EqualEof => "equal_eof",
            OvertypeMode => "overtype_mode",
            InsertMode => "insert_mode",
            OvertypeText => "overtype_text",
            InsertText => "insert_text",
            TypeText => "type_text",
            InsertLine => "insert_line",
            InsertChar => "insert_char",
            InsertInvisible => "insert_invisible",
            DeleteLine => "delete_line",
            DeleteChar => "delete_char",
            SwapLine => "swap_line",
            SplitLine => "split_line",
            DittoUp => "ditto_up",
            DittoDown => "ditto_down",
            CaseUp => "case_up",
            CaseLow => "case_low",
            CaseEdit => "case_edit",
            SetMarginLeft => "set_margin_left",
            SetMarginRight => "set_margin_right",
            LineFill => "line_fill",
            LineJustify => "line_justify",
            LineSquash => "line_squash",
            LineCentre => "line_centre",
            LineLeft => "line_left",
            LineRight => "line_right",
            WordAdvance => "word_advance",
            WordDelete => "word_delete",
            AdvanceParagraph => "advance_paragraph",
            DeleteParagraph => "delete_paragraph",
            SpanDefine => "span_define",
            SpanTransfer => "span_transfer",
            SpanCopy => "span_copy",
            SpanCompile => "span_compile",
            SpanJump => "span_jump",
            SpanIndex => "span_index",
            SpanAssign => "span_assign",
            SpanExecute => "span_execute",
            SpanExecuteNoRecompile => "span_execute_no_recompile",
            BlockDefine => "block_define",
            BlockTransfer => "block_transfer",
            BlockCopy => "block_copy",
            FrameKill => "frame_kill",
            FrameEdit => "frame_edit",
            FrameReturn => "frame_return",
            FrameParameters => "frame_parameters",
            FileInput => "file_input",
            FileOutput => "file_output",
            FileEdit => "file_edit",
            FileRead => "file_read",
            FileWrite => "file_write",
            FileClose => "file_close",
            FileRewind => "file_rewind",
            FileKill => "file_kill",
            FileExecute => "file_execute",
            FileSave => "file_save",
            FileTable => "file_table",
            FileGlobalInput => "file_global_input",
            FileGlobalOutput => "file_global_output",
            FileGlobalRewind => "file_global_rewind",
            FileGlobalKill => "file_global_kill",
            UserCommandIntroducer => "user_command_introducer",
            UserKey => "user_key",
            UserParent => "user_parent",
            UserSubprocess => "user_subprocess",
            UserUndo => "user_undo",
            UserLearn => "user_learn",
            UserRecall => "user_recall",
            ResizeWindow => "resize_window",
            Help => "help",
            Verify => "verify",
            Mark => "mark",
            Page => "page",
            Quit => "quit",
            Dump => "dump",
            Validate => "validate",
            ExecuteString => "execute_string",
            DoLastCommand => "do_last_command",
            Extended => "extended",
            ExitAbort => "exit_abort",
            ExitFail => "exit_fail",
            ExitSuccess => "exit_success",
            Prefix(_) => "prefix",
            NoSuch => "nosuch",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/command.rs"]
mod tests;
