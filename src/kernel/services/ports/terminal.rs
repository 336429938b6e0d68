use std::io;

/// What the terminal needs to paint one screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenView<'a> {
    pub frame_name: &'a str,
    /// Lines from `top_line` on, at most one screen's worth.
    pub lines: Vec<String>,
    pub top_line: usize,
    /// First column shown.
    pub left_col: usize,
    pub dot_line: usize,
    pub dot_col: usize,
    pub insert_mode: bool,
    pub message: Option<&'a str>,
}

/// Display driver contract. Rendering itself lives outside the kernel.
pub trait Terminal {
    /// Acquires the device; an error leaves the editor in batch mode.
    fn init(&mut self) -> io::Result<(u16, u16)>;

    /// Last known `(width, height)`.
    fn size(&self) -> (u16, u16);

    fn requery_size(&mut self) -> io::Result<(u16, u16)>;

    /// Registers the key that switches input to the command frame.
    fn set_introducer(&mut self, ch: u8);

    fn repaint(&mut self, view: &ScreenView<'_>) -> io::Result<()>;

    fn message(&mut self, text: &str);

    fn beep(&mut self);

    /// Releases the device. Must be safe to call more than once.
    fn restore(&mut self);
}

/// Terminal used when there is no display: init always fails.
#[derive(Debug, Default, Clone)]
pub struct NullTerminal {
    size: (u16, u16),
    echo: bool,
}

impl NullTerminal {
    /// Messages are written to stderr.
    pub fn stderr() -> Self {
        Self {
            size: (80, 24),
            echo: true,
        }
    }
}

impl Terminal for NullTerminal {
    fn init(&mut self) -> io::Result<(u16, u16)> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "no terminal available",
        ))
    }

    fn size(&self) -> (u16, u16) {
        self.size
    }

    fn requery_size(&mut self) -> io::Result<(u16, u16)> {
        Ok(self.size)
    }

    fn set_introducer(&mut self, _ch: u8) {}

    fn repaint(&mut self, _view: &ScreenView<'_>) -> io::Result<()> {
        Ok(())
    }

    fn message(&mut self, text: &str) {
        if self.echo {
            eprintln!("{text}");
        }
    }

    fn beep(&mut self) {}

    fn restore(&mut self) {}
}
