use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent};
use crossterm::style::{
    Attribute, Color as CrosstermColor, Print, SetAttribute, SetBackgroundColor,
    SetForegroundColor,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, size, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{execute, queue};

use crate::buffer::Buffer;
use crate::element::Element;
use crate::layout::{layout, LayoutResult, Rect};
use crate::render::render_to_buffer;
use crate::text::char_width;
use crate::types::{Rgb, TextStyle};

/// Owned terminal session. Construction switches the terminal into raw mode
/// on the alternate screen with the cursor hidden and mouse capture on;
/// dropping restores all of it, so every exit path cleans up.
pub struct Terminal {
    stdout: Stdout,
    width: u16,
    height: u16,
    current: Buffer,
    previous: Buffer,
    layout: LayoutResult,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, Hide, EnableMouseCapture)?;
        let (width, height) = size()?;
        log::debug!("terminal session started at {width}x{height}");
        Ok(Self {
            stdout,
            width,
            height,
            current: Buffer::new(width, height),
            previous: Buffer::new(width, height),
            layout: LayoutResult::new(),
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Layout computed by the most recent `render`. Input arriving now is
    /// resolved against this frame.
    pub fn layout(&self) -> &LayoutResult {
        &self.layout
    }

    /// Wait for raw input, then drain whatever else is already queued so a
    /// burst is handled in one batch. `None` blocks until something arrives;
    /// with a timeout the batch may come back empty.
    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<CrosstermEvent>> {
        let mut events = Vec::new();
        match timeout {
            Some(duration) => {
                if event::poll(duration)? {
                    events.push(event::read()?);
                }
            }
            None => events.push(event::read()?),
        }
        while event::poll(Duration::ZERO)? {
            events.push(event::read()?);
        }
        Ok(events)
    }

    /// Lay out and paint `root`, writing only the cells that changed since
    /// the previous frame.
    pub fn render(&mut self, root: &Element) -> io::Result<()> {
        let (width, height) = size()?;
        if (width, height) != (self.width, self.height) {
            log::debug!("terminal resized to {width}x{height}");
            self.width = width;
            self.height = height;
            self.current = Buffer::new(width, height);
            self.previous = Buffer::new(width, height);
            execute!(self.stdout, Clear(ClearType::All))?;
        }

        self.current.clear();
        self.layout = layout(root, Rect::from_size(width, height));
        render_to_buffer(root, &self.layout, &mut self.current);
        self.flush_diff()?;
        std::mem::swap(&mut self.current, &mut self.previous);
        Ok(())
    }

    fn flush_diff(&mut self) -> io::Result<()> {
        let Self {
            stdout,
            current,
            previous,
            ..
        } = self;

        let mut expected: Option<(u16, u16)> = None;
        let mut last_fg: Option<Rgb> = None;
        let mut last_bg: Option<Rgb> = None;
        let mut last_style = TextStyle::new();
        queue!(stdout, SetAttribute(Attribute::Reset))?;

        for (x, y, cell) in current.diff(previous) {
            // The visible half of a wide character repaints its neighbor.
            if cell.wide_continuation {
                continue;
            }

            if cell.style != last_style {
                // Reset drops colors too, so force both to be re-sent.
                queue!(stdout, SetAttribute(Attribute::Reset))?;
                if cell.style.bold {
                    queue!(stdout, SetAttribute(Attribute::Bold))?;
                }
                if cell.style.dim {
                    queue!(stdout, SetAttribute(Attribute::Dim))?;
                }
                if cell.style.italic {
                    queue!(stdout, SetAttribute(Attribute::Italic))?;
                }
                if cell.style.underline {
                    queue!(stdout, SetAttribute(Attribute::Underlined))?;
                }
                last_style = cell.style;
                last_fg = None;
                last_bg = None;
            }
            if last_fg != Some(cell.fg) {
                queue!(
                    stdout,
                    SetForegroundColor(CrosstermColor::Rgb {
                        r: cell.fg.r,
                        g: cell.fg.g,
                        b: cell.fg.b,
                    })
                )?;
                last_fg = Some(cell.fg);
            }
            if last_bg != Some(cell.bg) {
                queue!(
                    stdout,
                    SetBackgroundColor(CrosstermColor::Rgb {
                        r: cell.bg.r,
                        g: cell.bg.g,
                        b: cell.bg.b,
                    })
                )?;
                last_bg = Some(cell.bg);
            }
            if expected != Some((x, y)) {
                queue!(stdout, MoveTo(x, y))?;
            }
            queue!(stdout, Print(cell.ch))?;
            expected = Some((x + char_width(cell.ch).max(1) as u16, y));
        }

        queue!(stdout, SetAttribute(Attribute::Reset))?;
        stdout.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, DisableMouseCapture, Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        log::debug!("terminal session released");
    }
}
