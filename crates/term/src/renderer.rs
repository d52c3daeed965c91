//! TerminalRenderer: flushes the game framebuffer to a real terminal.
//!
//! A move repaints whole tiles, so a changed row is usually one contiguous
//! stretch across the board. The diff therefore sends at most one span per
//! row (first to last changed column) instead of many short runs, and a
//! [`Pen`] only emits the color and attribute changes between cells.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    /// Frame currently on screen; `None` forces a full redraw.
    shown: Option<FrameBuffer>,
    out: Vec<u8>,
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
            shown: None,
            out: Vec::with_capacity(32 * 1024),
        }
    }

    /// Switch to raw mode on the alternate screen with mouse capture on.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        self.out.clear();
        self.out
            .queue(terminal::EnterAlternateScreen)?
            .queue(cursor::Hide)?
            .queue(terminal::DisableLineWrap)?
            .queue(EnableMouseCapture)?;
        self.flush().context("failed to set up terminal")
    }

    pub fn exit(&mut self) -> Result<()> {
        self.out.clear();
        self.out
            .queue(DisableMouseCapture)?
            .queue(ResetColor)?
            .queue(SetAttribute(Attribute::Reset))?
            .queue(terminal::EnableLineWrap)?
            .queue(cursor::Show)?
            .queue(terminal::LeaveAlternateScreen)?;
        self.flush().context("failed to restore terminal")?;
        terminal::disable_raw_mode().context("failed to disable raw mode")
    }

    /// Forget what is on screen so the next draw repaints everything.
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Draw `fb`, then take ownership of it as the frame on screen.
    ///
    /// On return `fb` holds the previous frame's buffer, ready to be
    /// repainted by the view without a fresh allocation.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.out.clear();
        match self.shown.as_ref().filter(|shown| shown.size() == fb.size()) {
            Some(shown) => encode_diff_into(shown, fb, &mut self.out)?,
            None => encode_full_into(fb, &mut self.out)?,
        };
        self.flush().context("failed to write frame")?;

        let shown = self.shown.get_or_insert_with(|| FrameBuffer::new(0, 0));
        std::mem::swap(shown, fb);
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stdout.write_all(&self.out)?;
        self.stdout.flush()
    }
}

/// Encode a full repaint of `fb` into `out`. Returns the number of rows sent.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> io::Result<usize> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut pen = Pen::default();
    let mut sent = 0;
    for (y, row) in (0..fb.height()).zip(fb.rows()) {
        pen.span(out, 0, y, row)?;
        sent += 1;
    }
    pen.finish(out)?;
    Ok(sent)
}

/// Encode the changes from `shown` to `next` into `out`.
///
/// Both frames must have the same size; otherwise this falls back to a full
/// repaint. Returns the number of row spans sent (0 when nothing changed).
pub fn encode_diff_into(shown: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> io::Result<usize> {
    if shown.size() != next.size() {
        return encode_full_into(next, out);
    }

    let mut pen = Pen::default();
    let mut sent = 0;
    for ((y, old), new) in (0..next.height()).zip(shown.rows()).zip(next.rows()) {
        if let Some((start, end)) = dirty_span(old, new) {
            pen.span(out, start as u16, y, &new[start..end])?;
            sent += 1;
        }
    }
    if sent > 0 {
        pen.finish(out)?;
    }
    Ok(sent)
}

/// Half-open column range covering every cell that differs between two rows.
fn dirty_span(old: &[Cell], new: &[Cell]) -> Option<(usize, usize)> {
    let first = old.iter().zip(new).position(|(a, b)| a != b)?;
    let last = old.iter().zip(new).rposition(|(a, b)| a != b)?;
    Some((first, last + 1))
}

/// Tracks the terminal's current style so only differences are queued.
#[derive(Default)]
struct Pen {
    style: Option<CellStyle>,
}

impl Pen {
    fn span(&mut self, out: &mut Vec<u8>, x: u16, y: u16, cells: &[Cell]) -> io::Result<()> {
        out.queue(cursor::MoveTo(x, y))?;
        for cell in cells {
            self.set(out, cell.style)?;
            out.queue(Print(cell.ch))?;
        }
        Ok(())
    }

    fn set(&mut self, out: &mut Vec<u8>, style: CellStyle) -> io::Result<()> {
        let prev = self.style.replace(style);
        if prev == Some(style) {
            return Ok(());
        }

        // Attributes can only be switched off with a full reset, which also
        // drops both colors.
        let reset = prev.map_or(true, |p| p.bold != style.bold || p.dim != style.dim);
        if reset {
            out.queue(SetAttribute(Attribute::Reset))?;
            if style.bold {
                out.queue(SetAttribute(Attribute::Bold))?;
            }
            if style.dim {
                out.queue(SetAttribute(Attribute::Dim))?;
            }
        }
        if reset || prev.map(|p| p.fg) != Some(style.fg) {
            out.queue(SetForegroundColor(color(style.fg)))?;
        }
        if reset || prev.map(|p| p.bg) != Some(style.bg) {
            out.queue(SetBackgroundColor(color(style.bg)))?;
        }
        Ok(())
    }

    fn finish(&mut self, out: &mut Vec<u8>) -> io::Result<()> {
        self.style = None;
        out.queue(ResetColor)?.queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
