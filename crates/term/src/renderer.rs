//! TerminalRenderer: console setup and the crossterm-backed output sink.
//!
//! Commands are queued into an in-memory buffer and written to stdout in one
//! go on [`OutputSink::flush`], once per frame.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, Rgb};
use crate::sink::OutputSink;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
    keyboard_enhanced: bool,
    original_size: Option<(u16, u16)>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(64 * 1024),
            keyboard_enhanced: false,
            original_size: None,
        }
    }

    /// Prepare the console for a `width` x `height` character frame.
    ///
    /// Returns whether the terminal will report key release events.
    pub fn enter(&mut self, width: u16, height: u16) -> Result<bool> {
        terminal::enable_raw_mode()?;
        self.original_size = terminal::size().ok();

        self.keyboard_enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false);
        log::debug!("keyboard enhancement supported: {}", self.keyboard_enhanced);

        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        if self.keyboard_enhanced {
            self.buf.queue(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))?;
        }
        // Terminals that ignore resize requests keep their size; the frame is
        // then drawn into the top-left corner.
        if let Err(err) = self.buf.queue(terminal::SetSize(width, height)) {
            log::debug!("console resize to {width}x{height} not queued: {err}");
        }
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.flush_buf()?;

        log::debug!("terminal entered at {width}x{height}");
        Ok(self.keyboard_enhanced)
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        if self.keyboard_enhanced {
            self.buf.queue(PopKeyboardEnhancementFlags)?;
            self.keyboard_enhanced = false;
        }
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        if let Some((w, h)) = self.original_size.take() {
            let _ = self.buf.queue(terminal::SetSize(w, h));
        }
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        log::debug!("terminal restored");
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        self.buf.clear();
        Ok(())
    }
}

impl OutputSink for TerminalRenderer {
    fn move_cursor(&mut self, row: u16, col: u16) -> Result<()> {
        self.buf.queue(cursor::MoveTo(col, row))?;
        Ok(())
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.buf.queue(Print(text))?;
        Ok(())
    }

    fn set_style(&mut self, style: CellStyle) -> Result<()> {
        apply_style_into(&mut self.buf, style)
    }

    fn flush(&mut self) -> Result<()> {
        self.flush_buf()
    }
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
