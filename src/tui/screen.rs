//! Full-screen display on crossterm, painted with ratatui.

use std::io::{self, Stdout, Write};

use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::core::event::byte_to_char;
use crate::kernel::services::ports::{ScreenView, Terminal};

use super::terminal_guard::TerminalGuard;

type Backend = CrosstermBackend<Stdout>;

#[derive(Default)]
pub struct CrosstermTerminal {
    guard: Option<TerminalGuard>,
    terminal: Option<ratatui::Terminal<Backend>>,
    size: (u16, u16),
    introducer: u8,
}

impl CrosstermTerminal {
    pub fn new() -> Self {
        Self {
            size: (80, 24),
            introducer: b'\\',
            ..Self::default()
        }
    }
}

impl Terminal for CrosstermTerminal {
    fn init(&mut self) -> io::Result<(u16, u16)> {
        let guard = TerminalGuard::new()?;
        let terminal = ratatui::Terminal::new(CrosstermBackend::new(io::stdout()))?;
        self.size = crossterm::terminal::size()?;
        self.guard = Some(guard);
        self.terminal = Some(terminal);
        Ok(self.size)
    }

    fn size(&self) -> (u16, u16) {
        self.size
    }

    fn requery_size(&mut self) -> io::Result<(u16, u16)> {
        self.size = crossterm::terminal::size()?;
        if let Some(terminal) = self.terminal.as_mut() {
            terminal.autoresize()?;
        }
        Ok(self.size)
    }

    fn set_introducer(&mut self, ch: u8) {
        self.introducer = ch;
    }

    fn repaint(&mut self, view: &ScreenView<'_>) -> io::Result<()> {
        let Some(terminal) = self.terminal.as_mut() else {
            return Ok(());
        };
        let left = view.left_col;
        let mode = if view.insert_mode { "INSERT" } else { "OVERTYPE" };
        let status = match view.message {
            Some(message) => message.to_string(),
            None => format!(
                "{}  {}:{}  {}  [{}]",
                view.frame_name,
                view.dot_line + 1,
                view.dot_col + 1,
                mode,
                byte_to_char(self.introducer)
            ),
        };

        terminal.draw(|frame| {
            let [body, footer] =
                Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());
            let lines: Vec<Line> = view
                .lines
                .iter()
                .map(|line| Line::raw(line.chars().skip(left).collect::<String>()))
                .collect();
            frame.render_widget(Paragraph::new(lines), body);
            frame.render_widget(
                Paragraph::new(status.as_str()).style(Style::default().add_modifier(Modifier::REVERSED)),
                footer,
            );

            let row = view.dot_line.saturating_sub(view.top_line);
            let col = view.dot_col.saturating_sub(left);
            if row < usize::from(body.height) && col < usize::from(body.width) {
                frame.set_cursor_position((body.x + col as u16, body.y + row as u16));
            }
        })?;
        Ok(())
    }

    fn message(&mut self, text: &str) {
        if self.terminal.is_none() {
            eprintln!("{text}");
        }
    }

    fn beep(&mut self) {
        let mut out = io::stdout();
        let _ = out.write_all(b"\x07");
        let _ = out.flush();
    }

    fn restore(&mut self) {
        self.terminal = None;
        if let Some(guard) = self.guard.take() {
            if let Err(error) = guard.restorer().restore() {
                tracing::warn!(%error, "terminal restore failed");
            }
        }
    }
}
