//! Terminal drawing surface.
//!
//! The logical playfield is mapped onto a pixel buffer where every terminal
//! cell holds two vertically stacked pixels (the upper half-block glyph with
//! separate foreground and background colours).  Text runs are queued during
//! the frame and printed over the pixels on `present`.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use crate::constants::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
use crate::entities::{Rect, Rgb};
use crate::error::GameError;
use crate::render::Surface;

/// Smallest terminal that still shows a recognisable playfield.  Anything
/// smaller, including a zero-sized terminal, is `SurfaceUnavailable`.
pub const MIN_COLS: u16 = 12;
pub const MIN_ROWS: u16 = 10;

const BLANK: Rgb = Rgb(0, 0, 0);

fn to_color(c: Rgb) -> Color {
    Color::Rgb {
        r: c.0,
        g: c.1,
        b: c.2,
    }
}

// ── Pixel buffer ──────────────────────────────────────────────────────────────

struct PixelBuf {
    w: usize,
    h: usize, // pixel height = canvas rows * 2
    px: Vec<Rgb>,
}

impl PixelBuf {
    fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            px: vec![BLANK; w * h],
        }
    }

    fn fill(&mut self, c: Rgb) {
        self.px.iter_mut().for_each(|p| *p = c);
    }

    fn get(&self, x: usize, y: usize) -> Rgb {
        self.px[y * self.w + x]
    }

    /// Fill the half-open pixel span [x0, x1) x [y0, y1), clipped to the buffer.
    fn fill_span(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, c: Rgb) {
        let x0 = x0.clamp(0, self.w as i64) as usize;
        let x1 = x1.clamp(0, self.w as i64) as usize;
        let y0 = y0.clamp(0, self.h as i64) as usize;
        let y1 = y1.clamp(0, self.h as i64) as usize;
        for y in y0..y1 {
            self.px[y * self.w + x0..y * self.w + x1.max(x0)].fill(c);
        }
    }
}

// ── Text overlay ──────────────────────────────────────────────────────────────

struct TextRun {
    col: usize,
    row: usize,
    text: String,
    color: Rgb,
}

// ── Surface ───────────────────────────────────────────────────────────────────

/// Where the canvas sits inside the terminal, in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    pub left: u16,
    pub cols: u16,
    pub rows: u16,
}

pub struct TerminalSurface<W: Write> {
    out: W,
    layout: Layout,
    buf: PixelBuf,
    texts: Vec<TextRun>,
}

impl<W: Write> TerminalSurface<W> {
    /// Size the canvas to the current terminal.
    pub fn new(out: W, reserved_rows: u16) -> Result<Self, GameError> {
        let (cols, rows) = terminal::size()
            .map_err(|e| GameError::SurfaceUnavailable(format!("terminal size: {e}")))?;
        Self::with_size(out, cols, rows.saturating_sub(reserved_rows))
    }

    /// Size the canvas to an explicit cell area.
    pub fn with_size(out: W, cols: u16, rows: u16) -> Result<Self, GameError> {
        let layout = fit(cols, rows)?;
        Ok(Self {
            out,
            buf: PixelBuf::new(layout.cols as usize, layout.rows as usize * 2),
            layout,
            texts: Vec::new(),
        })
    }

    pub fn resize(&mut self, cols: u16, rows: u16) -> Result<(), GameError> {
        self.layout = fit(cols, rows)?;
        self.buf = PixelBuf::new(self.layout.cols as usize, self.layout.rows as usize * 2);
        self.texts.clear();
        Ok(())
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// The underlying writer, for chrome drawn around the canvas.
    pub fn writer(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn scale_x(&self) -> f64 {
        self.buf.w as f64 / PLAYFIELD_WIDTH
    }

    fn scale_y(&self) -> f64 {
        self.buf.h as f64 / PLAYFIELD_HEIGHT
    }

    fn draw_pixels(&mut self) -> std::io::Result<()> {
        let rows = self.buf.h / 2;
        for row in 0..rows {
            self.out
                .queue(cursor::MoveTo(self.layout.left, row as u16))?;
            let mut prev: Option<(Rgb, Rgb)> = None;
            for col in 0..self.buf.w {
                let top = self.buf.get(col, row * 2);
                let bot = self.buf.get(col, row * 2 + 1);
                if prev != Some((top, bot)) {
                    self.out.queue(style::SetForegroundColor(to_color(top)))?;
                    self.out.queue(style::SetBackgroundColor(to_color(bot)))?;
                    prev = Some((top, bot));
                }
                self.out.queue(Print('\u{2580}'))?; // ▀
            }
            self.out.queue(style::ResetColor)?;
        }
        Ok(())
    }

    fn draw_texts(&mut self) -> std::io::Result<()> {
        for run in &self.texts {
            let room = self.buf.w.saturating_sub(run.col);
            let visible: String = run.text.chars().take(room).collect();
            if visible.is_empty() {
                continue;
            }
            let bg = self.buf.get(run.col, run.row * 2 + 1);
            self.out.queue(cursor::MoveTo(
                self.layout.left + run.col as u16,
                run.row as u16,
            ))?;
            self.out.queue(style::SetForegroundColor(to_color(run.color)))?;
            self.out.queue(style::SetBackgroundColor(to_color(bg)))?;
            self.out.queue(Print(visible))?;
        }
        self.out.queue(style::ResetColor)?;
        Ok(())
    }
}

/// Largest 2:3 canvas that fits in `cols` x `rows` cells, centred horizontally.
fn fit(cols: u16, rows: u16) -> Result<Layout, GameError> {
    if cols < MIN_COLS || rows < MIN_ROWS {
        return Err(GameError::SurfaceUnavailable(format!(
            "terminal too small: {cols}x{rows}, need at least {MIN_COLS}x{MIN_ROWS}"
        )));
    }
    let (pw, ph) = (PLAYFIELD_WIDTH as u32, PLAYFIELD_HEIGHT as u32);
    let width_for_rows = rows as u32 * 2 * pw / ph;
    let (canvas_cols, canvas_rows) = if width_for_rows <= cols as u32 {
        (width_for_rows as u16, rows)
    } else {
        (cols, (cols as u32 * ph / pw / 2) as u16)
    };
    Ok(Layout {
        left: (cols - canvas_cols) / 2,
        cols: canvas_cols,
        rows: canvas_rows,
    })
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn clear(&mut self) {
        self.buf.fill(BLANK);
        self.texts.clear();
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        let (sx, sy) = (self.scale_x(), self.scale_y());
        self.buf.fill_span(
            (rect.x * sx).round() as i64,
            (rect.y * sy).round() as i64,
            ((rect.x + rect.w) * sx).round() as i64,
            ((rect.y + rect.h) * sy).round() as i64,
            color,
        );
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, color: Rgb) {
        let col = (x * self.scale_x()).floor();
        // Baseline sits under the glyphs: put the text in the cell just above it.
        let row = ((y * self.scale_y()) / 2.0).floor() - 1.0;
        if col < 0.0 || row < 0.0 {
            return;
        }
        let (col, row) = (col as usize, row as usize);
        if col >= self.buf.w || row >= self.buf.h / 2 {
            return;
        }
        self.texts.push(TextRun {
            col,
            row,
            text: text.to_string(),
            color,
        });
    }

    fn present(&mut self) -> Result<(), GameError> {
        self.draw_pixels()?;
        self.draw_texts()?;
        self.out.flush()?;
        Ok(())
    }
}
