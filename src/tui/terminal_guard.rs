//! Raw-mode screen session and the signal flags the editor polls.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::kernel::mode::ModeState;

/// The two terminal state changes a screen session makes. Each is undone
/// separately so a half-entered session can be rolled back.
pub trait TerminalOps: Send + Sync + 'static {
    fn enter_raw(&self) -> io::Result<()>;
    fn leave_raw(&self) -> io::Result<()>;
    fn enter_screen(&self) -> io::Result<()>;
    fn leave_screen(&self) -> io::Result<()>;
}

#[derive(Debug, Default)]
pub struct CrosstermTerminalOps;

impl TerminalOps for CrosstermTerminalOps {
    fn enter_raw(&self) -> io::Result<()> {
        crossterm::terminal::enable_raw_mode()
    }

    fn leave_raw(&self) -> io::Result<()> {
        crossterm::terminal::disable_raw_mode()
    }

    fn enter_screen(&self) -> io::Result<()> {
        use crossterm::{cursor, execute, terminal::EnterAlternateScreen};
        execute!(
            io::stdout(),
            EnterAlternateScreen,
            cursor::SetCursorStyle::SteadyBlock
        )
    }

    fn leave_screen(&self) -> io::Result<()> {
        use crossterm::{cursor, execute, terminal::LeaveAlternateScreen};
        execute!(
            io::stdout(),
            LeaveAlternateScreen,
            cursor::SetCursorStyle::DefaultUserShape
        )
    }
}

/// Shared handle that leaves the session exactly once, whichever owner gets
/// there first.
#[derive(Clone)]
pub struct TerminalRestorer {
    restored: Arc<AtomicBool>,
    ops: Arc<dyn TerminalOps>,
}

impl TerminalRestorer {
    /// Leaves the alternate screen and raw mode. Both steps run; the first
    /// error is returned.
    pub fn restore(&self) -> io::Result<()> {
        if self.restored.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        let screen = self.ops.leave_screen();
        let raw = self.ops.leave_raw();
        screen.and(raw)
    }

    pub fn is_restored(&self) -> bool {
        self.restored.load(Ordering::SeqCst)
    }
}

pub struct TerminalGuard {
    restorer: TerminalRestorer,
}

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        Self::with_ops(Arc::new(CrosstermTerminalOps))
    }

    pub fn with_ops(ops: Arc<dyn TerminalOps>) -> io::Result<Self> {
        ops.enter_raw()?;
        if let Err(error) = ops.enter_screen() {
            if let Err(undo) = ops.leave_raw() {
                tracing::warn!(error = %undo, "raw mode rollback failed");
            }
            return Err(error);
        }
        Ok(Self {
            restorer: TerminalRestorer {
                restored: Arc::new(AtomicBool::new(false)),
                ops,
            },
        })
    }

    pub fn restorer(&self) -> TerminalRestorer {
        self.restorer.clone()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = self.restorer.restore();
    }
}

/// Routes SIGINT, SIGWINCH and SIGHUP to the session flags. Handlers only
/// set flags; the editor polls them between keys and repeat iterations.
/// SIGTERM is treated as a hangup.
#[cfg(unix)]
pub fn install_signal_flags(mode: &ModeState) -> io::Result<()> {
    use signal_hook::consts::signal::{SIGHUP, SIGINT, SIGTERM, SIGWINCH};
    use signal_hook::flag::register;

    register(SIGINT, mode.tt_control_c.handle())?;
    register(SIGWINCH, mode.tt_win_changed.handle())?;
    register(SIGHUP, mode.hangup.handle())?;
    register(SIGTERM, mode.hangup.handle())?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/tui/terminal_guard.rs"]
mod tests;
