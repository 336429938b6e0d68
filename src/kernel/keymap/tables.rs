//! Binding data for both dialects.
//!
//! Letters appear upper-case only; the loader binds both cases. Section
//! entries keep their written order.

use crate::core::event::*;
use crate::core::{Command, Prefix};

use Command as C;
use Prefix as P;

pub(super) type Section = (Prefix, &'static [(u8, Command)]);

pub(super) static SPECIAL_KEYS: &[(KeyCode, Command)] = &[
    (KEY_UP, C::Up),
    (KEY_DOWN, C::Down),
    (KEY_LEFT, C::Left),
    (KEY_RIGHT, C::Right),
    (KEY_HOME, C::Home),
    (KEY_END, C::WindowEnd),
    (KEY_PAGE_UP, C::WindowBackward),
    (KEY_PAGE_DOWN, C::WindowForward),
    (KEY_INSERT, C::InsertChar),
    (KEY_DELETE, C::DeleteChar),
    (KEY_BACK_TAB, C::Backtab),
    (KEY_BACKSPACE, C::Rubout),
    (KEY_RESIZE, C::ResizeWindow),
];

pub(super) static CONTROL_KEYS: &[(u8, Command)] = &[
    (CR, C::Return),
    (TAB, C::Tab),
    (BS, C::Rubout),
    (DEL, C::Rubout),
];

pub(super) static OLD_PRIMARY: &[(u8, Command)] = &[
    (b'*', C::Prefix(P::Ast)),
    (b'A', C::Advance),
    (b'B', C::Bridge),
    (b'C', C::InsertChar),
    (b'D', C::DeleteChar),
    (b'E', C::Prefix(P::E)),
    (b'F', C::Prefix(P::F)),
    (b'G', C::Get),
    (b'H', C::Help),
    (b'I', C::InsertText),
    (b'J', C::Jump),
    (b'K', C::DeleteLine),
    (b'L', C::InsertLine),
    (b'M', C::Mark),
    (b'N', C::Next),
    (b'O', C::OvertypeText),
    (b'P', C::Page),
    (b'Q', C::Quit),
    (b'R', C::Replace),
    (b'S', C::Prefix(P::S)),
    (b'T', C::Prefix(P::T)),
    (b'U', C::Prefix(P::U)),
    (b'V', C::Verify),
    (b'W', C::Prefix(P::W)),
    (b'X', C::Prefix(P::X)),
    (b'Y', C::Prefix(P::Y)),
    (b'Z', C::Prefix(P::Z)),
    (b'~', C::Prefix(P::Tilde)),
    (b'"', C::DittoUp),
    (b'\'', C::DittoDown),
    (b'[', C::SetMarginLeft),
    (b']', C::SetMarginRight),
];

const CASE: &[(u8, Command)] = &[(b'U', C::CaseUp), (b'L', C::CaseLow), (b'E', C::CaseEdit)];

const FRAME: &[(u8, Command)] = &[
    (b'O', C::Prefix(P::Eo)),
    (b'Q', C::Prefix(P::Eq)),
    (b'D', C::FrameEdit),
    (b'K', C::FrameKill),
    (b'R', C::FrameReturn),
    (b'P', C::FrameParameters),
    (b'X', C::ExecuteString),
];

const EQUAL_END: &[(u8, Command)] = &[
    (b'L', C::EqualEol),
    (b'P', C::EqualEop),
    (b'F', C::EqualEof),
];

const EQUAL: &[(u8, Command)] = &[
    (b'S', C::EqualString),
    (b'C', C::EqualColumn),
    (b'M', C::EqualMark),
];

const FILE: &[(u8, Command)] = &[
    (b'I', C::FileInput),
    (b'O', C::FileOutput),
    (b'E', C::FileEdit),
    (b'R', C::FileRead),
    (b'W', C::FileWrite),
    (b'C', C::FileClose),
    (b'K', C::FileKill),
    (b'X', C::FileExecute),
    (b'S', C::FileSave),
    (b'T', C::FileTable),
    (b'B', C::FileRewind),
    (b'G', C::Prefix(P::Fg)),
];

const FILE_GLOBAL: &[(u8, Command)] = &[
    (b'I', C::FileGlobalInput),
    (b'O', C::FileGlobalOutput),
    (b'R', C::FileGlobalRewind),
    (b'K', C::FileGlobalKill),
];

const USER: &[(u8, Command)] = &[
    (b'C', C::UserCommandIntroducer),
    (b'K', C::UserKey),
    (b'P', C::UserParent),
    (b'S', C::UserSubprocess),
    (b'U', C::UserUndo),
    (b'L', C::UserLearn),
    (b'R', C::UserRecall),
];

const WINDOW: &[(u8, Command)] = &[
    (b'F', C::WindowForward),
    (b'B', C::WindowBackward),
    (b'L', C::WindowLeft),
    (b'R', C::WindowRight),
    (b'S', C::WindowScroll),
    (b'T', C::WindowTop),
    (b'E', C::WindowEnd),
    (b'N', C::WindowNew),
    (b'M', C::WindowMiddle),
    (b'H', C::WindowSetHeight),
    (b'U', C::WindowUpdate),
];

const EXIT: &[(u8, Command)] = &[
    (b'S', C::ExitSuccess),
    (b'F', C::ExitFail),
    (b'A', C::ExitAbort),
];

const LINE_FORMAT: &[(u8, Command)] = &[
    (b'F', C::LineFill),
    (b'J', C::LineJustify),
    (b'S', C::LineSquash),
    (b'C', C::LineCentre),
    (b'L', C::LineLeft),
    (b'R', C::LineRight),
];

const DEBUG: &[(u8, Command)] = &[(b'D', C::Dump), (b'V', C::Validate)];

pub(super) static OLD_SECTIONS: &[Section] = &[
    (P::Ast, CASE),
    (P::E, FRAME),
    (P::Eo, EQUAL_END),
    (P::Eq, EQUAL),
    (P::F, FILE),
    (P::Fg, FILE_GLOBAL),
    (
        P::S,
        &[
            (b'D', C::SpanDefine),
            (b'T', C::SpanTransfer),
            (b'C', C::SpanCopy),
            (b'J', C::SpanJump),
            (b'I', C::SpanIndex),
            (b'A', C::SpanAssign),
            (b'X', C::SpanExecute),
            (b'R', C::SpanExecuteNoRecompile),
            (b'W', C::SwapLine),
            (b'L', C::SplitLine),
        ],
    ),
    (
        P::T,
        &[
            (b'F', C::LineFill),
            (b'J', C::LineJustify),
            (b'S', C::LineSquash),
            (b'C', C::LineCentre),
            (b'L', C::LineLeft),
            (b'R', C::LineRight),
            (b'T', C::TypeText),
        ],
    ),
    (
        P::U,
        &[
            (b'C', C::UserCommandIntroducer),
            (b'K', C::UserKey),
            (b'P', C::UserParent),
            (b'S', C::UserSubprocess),
            (b'U', C::UserUndo),
            (b'L', C::UserLearn),
            (b'R', C::UserRecall),
            (b'O', C::OpSysCommand),
        ],
    ),
    (P::W, WINDOW),
    (P::X, EXIT),
    (
        P::Y,
        &[
            (b'A', C::WordAdvance),
            (b'D', C::WordDelete),
            (b'P', C::AdvanceParagraph),
            (b'K', C::DeleteParagraph),
        ],
    ),
    (
        P::Z,
        &[
            (b'D', C::Dump),
            (b'V', C::Validate),
            (b'B', C::BlockDefine),
            (b'T', C::BlockTransfer),
            (b'C', C::BlockCopy),
        ],
    ),
    (
        P::Tilde,
        &[
            (b'I', C::InsertMode),
            (b'O', C::OvertypeMode),
            (b'C', C::PositionColumn),
            (b'L', C::PositionLine),
            (b'D', C::DoLastCommand),
            (b'X', C::Extended),
        ],
    ),
];

pub(super) static NEW_PRIMARY: &[(u8, Command)] = &[
    (b'*', C::Prefix(P::Ast)),
    (b'A', C::Prefix(P::A)),
    (b'B', C::Prefix(P::B)),
    (b'C', C::Prefix(P::C)),
    (b'D', C::Prefix(P::D)),
    (b'E', C::Prefix(P::E)),
    (b'F', C::Prefix(P::F)),
    (b'G', C::Get),
    (b'H', C::Help),
    (b'I', C::Prefix(P::I)),
    (b'J', C::Jump),
    (b'K', C::Prefix(P::K)),
    (b'L', C::Prefix(P::L)),
    (b'M', C::Mark),
    (b'N', C::Next),
    (b'O', C::Prefix(P::O)),
    (b'P', C::Prefix(P::P)),
    (b'Q', C::Quit),
    (b'R', C::Replace),
    (b'S', C::Prefix(P::S)),
    (b'T', C::Prefix(P::T)),
    (b'U', C::Prefix(P::U)),
    (b'V', C::Verify),
    (b'W', C::Prefix(P::W)),
    (b'X', C::Prefix(P::X)),
    (b'Y', C::Prefix(P::Y)),
    (b'Z', C::Prefix(P::Z)),
    (b'~', C::Prefix(P::Tilde)),
    (b'"', C::DittoUp),
    (b'\'', C::DittoDown),
];

pub(super) static NEW_SECTIONS: &[Section] = &[
    (P::Ast, CASE),
    (
        P::A,
        &[
            (b'L', C::Advance),
            (b'W', C::WordAdvance),
            (b'P', C::AdvanceParagraph),
        ],
    ),
    (
        P::B,
        &[
            (b'R', C::Bridge),
            (b'D', C::BlockDefine),
            (b'T', C::BlockTransfer),
            (b'C', C::BlockCopy),
        ],
    ),
    (
        P::C,
        &[
            (b'S', C::SpanCopy),
            (b'B', C::BlockCopy),
            (b'U', C::DittoUp),
            (b'D', C::DittoDown),
        ],
    ),
    (
        P::D,
        &[
            (b'C', C::DeleteChar),
            (b'L', C::DeleteLine),
            (b'W', C::WordDelete),
            (b'P', C::DeleteParagraph),
        ],
    ),
    (P::E, FRAME),
    (P::Eo, EQUAL_END),
    (P::Eq, EQUAL),
    (P::F, FILE),
    (P::Fg, FILE_GLOBAL),
    (
        P::I,
        &[
            (b'T', C::InsertText),
            (b'C', C::InsertChar),
            (b'L', C::InsertLine),
            (b'M', C::InsertMode),
            (b'I', C::InsertInvisible),
        ],
    ),
    (
        P::K,
        &[(b'L', C::SetMarginLeft), (b'R', C::SetMarginRight)],
    ),
    (P::L, LINE_FORMAT),
    (
        P::O,
        &[
            (b'T', C::OvertypeText),
            (b'M', C::OvertypeMode),
            (b'S', C::OpSysCommand),
        ],
    ),
    (
        P::P,
        &[
            (b'C', C::PositionColumn),
            (b'L', C::PositionLine),
            (b'G', C::Page),
        ],
    ),
    (
        P::S,
        &[
            (b'D', C::SpanDefine),
            (b'T', C::SpanTransfer),
            (b'C', C::SpanCompile),
            (b'J', C::SpanJump),
            (b'I', C::SpanIndex),
            (b'A', C::SpanAssign),
            (b'X', C::SpanExecute),
            (b'R', C::SpanExecuteNoRecompile),
            (b'L', C::SplitLine),
            (b'W', C::SwapLine),
        ],
    ),
    (
        P::T,
        &[
            (b'C', C::Prefix(P::Tc)),
            (b'F', C::Prefix(P::Tf)),
            (b'T', C::TypeText),
        ],
    ),
    (P::Tc, CASE),
    (
        P::Tf,
        &[
            (b'F', C::LineFill),
            (b'J', C::LineJustify),
            (b'S', C::LineSquash),
        ],
    ),
    (P::U, USER),
    (P::W, WINDOW),
    (P::X, EXIT),
    (P::Y, &[(b'X', C::Extended)]),
    (P::Z, DEBUG),
    (P::Tilde, &[(b'D', C::DoLastCommand)]),
];
