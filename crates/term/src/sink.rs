//! Output sink abstraction and frame presentation.
//!
//! A sink only needs absolute cursor moves and raw text. Frames are drawn by
//! moving to the start of each row (top-left first) and overwriting every
//! cell; there is no diffing or double buffering.

use anyhow::Result;

use crate::fb::{CellStyle, FrameBuffer};

/// Destination for rendered text, usually the terminal.
pub trait OutputSink {
    /// Move the cursor to an absolute `row`, `col` (zero-based).
    fn move_cursor(&mut self, row: u16, col: u16) -> Result<()>;

    /// Write raw text at the cursor.
    fn write(&mut self, text: &str) -> Result<()>;

    /// Style applied to text written after this call.
    fn set_style(&mut self, _style: CellStyle) -> Result<()> {
        Ok(())
    }

    /// Push everything written so far to the device.
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn move_cursor(&mut self, row: u16, col: u16) -> Result<()> {
        (**self).move_cursor(row, col)
    }

    fn write(&mut self, text: &str) -> Result<()> {
        (**self).write(text)
    }

    fn set_style(&mut self, style: CellStyle) -> Result<()> {
        (**self).set_style(style)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }
}

/// Write every row of `fb`, starting from the top-left.
///
/// Consecutive cells with the same style are written as one run. `run` is
/// scratch space that callers can keep between frames.
pub fn present<S: OutputSink + ?Sized>(
    fb: &FrameBuffer,
    sink: &mut S,
    run: &mut String,
) -> Result<()> {
    run.clear();
    for y in 0..fb.height() {
        sink.move_cursor(y, 0)?;
        let mut style: Option<CellStyle> = None;
        for cell in fb.row(y) {
            if style != Some(cell.style) {
                if !run.is_empty() {
                    sink.write(run)?;
                    run.clear();
                }
                sink.set_style(cell.style)?;
                style = Some(cell.style);
            }
            run.push(cell.ch);
        }
        if !run.is_empty() {
            sink.write(run)?;
            run.clear();
        }
    }
    Ok(())
}

/// Overlay the frame-rate readout in the top-left corner.
pub fn write_fps<S: OutputSink + ?Sized>(sink: &mut S, fps: f64) -> Result<()> {
    sink.move_cursor(0, 0)?;
    sink.set_style(CellStyle::default())?;
    sink.write(&format!("FPS: {fps:.2}"))
}

/// In-memory screen that applies cursor moves and writes to a grid of chars.
///
/// Text past the right edge or below the bottom is dropped, like a terminal
/// with line wrap disabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessScreen {
    width: u16,
    height: u16,
    lines: Vec<Vec<char>>,
    cursor: (u16, u16),
    flushes: usize,
}

impl HeadlessScreen {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            lines: vec![vec![' '; width as usize]; height as usize],
            cursor: (0, 0),
            flushes: 0,
        }
    }

    pub fn line(&self, row: u16) -> String {
        self.lines
            .get(row as usize)
            .map(|l| l.iter().collect())
            .unwrap_or_default()
    }

    pub fn lines(&self) -> Vec<String> {
        (0..self.height).map(|r| self.line(r)).collect()
    }

    /// `(row, col)` of the cursor.
    pub fn cursor(&self) -> (u16, u16) {
        self.cursor
    }

    pub fn flushes(&self) -> usize {
        self.flushes
    }
}

impl OutputSink for HeadlessScreen {
    fn move_cursor(&mut self, row: u16, col: u16) -> Result<()> {
        self.cursor = (row, col);
        Ok(())
    }

    fn write(&mut self, text: &str) -> Result<()> {
        let (row, mut col) = self.cursor;
        for ch in text.chars() {
            if row < self.height && col < self.width {
                self.lines[row as usize][col as usize] = ch;
            }
            col = col.saturating_add(1);
        }
        self.cursor = (row, col);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.flushes += 1;
        Ok(())
    }
}
