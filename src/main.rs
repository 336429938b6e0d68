use std::io;

use ludwig::kernel::services::adapters::load_settings;
use ludwig::kernel::services::ports::keys::StreamKeys;
use ludwig::kernel::services::ports::KeySource;
use ludwig::kernel::{start_up, EditMode, LoopExit};
use ludwig::tui::crossterm::CrosstermKeys;
use ludwig::tui::CrosstermTerminal;

mod logging;

fn main() {
    let command_line = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    let settings = load_settings();
    let _logging = logging::init(settings.log_filter.as_deref());

    let mut editor = match start_up(&command_line, settings, Box::new(CrosstermTerminal::new())) {
        Ok(editor) => editor,
        Err(error) => {
            tracing::error!(%error, "startup failed");
            eprintln!("{error}");
            std::process::exit(1);
        }
    };

    #[cfg(unix)]
    if let Err(error) = ludwig::tui::terminal_guard::install_signal_flags(editor.mode()) {
        tracing::warn!(%error, "signal handlers not installed");
    }

    let mut keys: Box<dyn KeySource> = match editor.mode().edit_mode {
        EditMode::Screen => Box::new(CrosstermKeys::new(
            editor.mode().tt_control_c.clone(),
            editor.mode().hangup.clone(),
        )),
        EditMode::Batch => Box::new(StreamKeys::new(io::stdin().lock())),
    };

    let exit = editor.execute_immediate(keys.as_mut());
    if exit == LoopExit::EndOfInput {
        tracing::info!("end of input");
    }
    let code = exit.exit_code(editor.mode().ludwig_aborted);
    editor.windup();
    drop(editor);
    std::process::exit(code);
}
