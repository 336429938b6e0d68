//! Core vocabulary shared by the dispatch kernel and the frontends:
//! - command: editor verbs and their policy
//! - event: key codes
//! - param: leading and trailing parameters

pub mod command;
pub mod event;
pub mod param;

pub use command::{CmdAttrib, Command, LeadAllow, Prefix};
pub use event::{KeyCode, KeyEvent, KeyModifiers};
pub use param::{LeadParam, TParObject, TparDelimiter};
