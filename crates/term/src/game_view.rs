//! GameView: draws a `core::GameSnapshot` as a bordered tile grid with a
//! stats panel to its right.
//!
//! Pure (no I/O). The board is laid out once per frame as a [`BoardLayout`];
//! every drawing step works from that layout.

use crate::core::GameSnapshot;
use crate::fb::{digit_count, Cell, CellStyle, FrameBuffer, Rgb};
use crate::palette::{text_color, TilePalette};
use crate::types::tile_rank;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const BLACK: Rgb = Rgb::new(0, 0, 0);
const BOARD: CellStyle = CellStyle::new(Rgb::new(80, 80, 90), Rgb::new(30, 30, 40));
const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), BLACK);
const EMPTY_DOT: Rgb = Rgb::new(90, 90, 100);
const PANEL_LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), BLACK).with_bold();
const PANEL_VALUE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), BLACK);
const BANNER: CellStyle = CellStyle::new(Rgb::new(255, 255, 255), BLACK);

/// Narrower panels are not drawn.
const PANEL_MIN_W: u16 = 12;
const HINTS: [&str; 3] = ["arrows/hjkl", "r restart", "q quit"];

/// Where a `dim x dim` board lands inside a viewport.
///
/// Each tile owns a `pitch_w x pitch_h` block: the painted tile plus a
/// one-cell gutter on its right and bottom. The border sits one cell outside
/// the outer gutter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// Top-left border corner.
    pub x: u16,
    pub y: u16,
    /// Outer size including the border.
    pub width: u16,
    pub height: u16,
    pitch_w: u16,
    pitch_h: u16,
}

impl BoardLayout {
    /// First painted cell of the tile at (row, col).
    pub fn tile_origin(&self, row: usize, col: usize) -> (u16, u16) {
        let step = |origin: u16, i: usize, pitch: u16| {
            let i = u16::try_from(i).unwrap_or(u16::MAX);
            origin.saturating_add(2).saturating_add(i.saturating_mul(pitch))
        };
        (step(self.x, col, self.pitch_w), step(self.y, row, self.pitch_h))
    }

    /// Painted size of one tile.
    pub fn tile_size(&self) -> (u16, u16) {
        (self.pitch_w - 1, self.pitch_h - 1)
    }

    fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    fn middle_row(&self) -> u16 {
        self.y.saturating_add(self.height / 2)
    }
}

/// Renders 2048 boards of any dimension.
pub struct GameView {
    pitch_w: u16,
    pitch_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x4 keeps tiles roughly square with typical terminal glyphs.
        Self::new(7, 4)
    }
}

impl GameView {
    /// Tile pitch in columns and rows, gutter included. Pitches below 3x2
    /// are raised to it so every tile keeps a painted cell.
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            pitch_w: cell_w.max(3),
            pitch_h: cell_h.max(2),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Outer size of the bordered board for a `dim x dim` grid.
    pub fn frame_size(&self, dim: usize) -> (u16, u16) {
        let dim = u16::try_from(dim).unwrap_or(u16::MAX);
        (
            dim.saturating_mul(self.pitch_w).saturating_add(3),
            dim.saturating_mul(self.pitch_h).saturating_add(3),
        )
    }

    /// Centered horizontally; vertically per the anchor.
    pub fn layout(&self, dim: usize, viewport: Viewport) -> BoardLayout {
        let (width, height) = self.frame_size(dim);
        BoardLayout {
            x: viewport.width.saturating_sub(width) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(height) / 2,
                AnchorY::Top => 0,
            },
            width,
            height,
            pitch_w: self.pitch_w,
            pitch_h: self.pitch_h,
        }
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Allocation-free once `fb` has reached the viewport size.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        palette: &TilePalette,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Cell::default());

        let layout = self.layout(snap.dim, viewport);
        draw_frame(fb, &layout);
        for row in 0..snap.dim {
            for col in 0..snap.dim {
                draw_tile(fb, palette, &layout, row, col, snap.tile(row, col));
            }
        }
        draw_side_panel(fb, snap, &layout, viewport);

        if !snap.playable() {
            draw_game_over(fb, snap, &layout);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, palette: &TilePalette, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, palette, viewport, &mut fb);
        fb
    }
}

fn draw_frame(fb: &mut FrameBuffer, l: &BoardLayout) {
    if l.width < 2 || l.height < 2 {
        return;
    }
    let (inner_w, inner_h) = (l.width - 2, l.height - 2);
    let (right, bottom) = (l.right() - 1, l.y.saturating_add(l.height - 1));

    fb.fill_rect(l.x + 1, l.y + 1, inner_w, inner_h, ' ', BOARD);
    fb.fill_rect(l.x + 1, l.y, inner_w, 1, '─', BORDER);
    fb.fill_rect(l.x + 1, bottom, inner_w, 1, '─', BORDER);
    fb.fill_rect(l.x, l.y + 1, 1, inner_h, '│', BORDER);
    fb.fill_rect(right, l.y + 1, 1, inner_h, '│', BORDER);
    for (x, y, ch) in [(l.x, l.y, '┌'), (right, l.y, '┐'), (l.x, bottom, '└'), (right, bottom, '┘')] {
        fb.put_char(x, y, ch, BORDER);
    }
}

fn draw_tile(fb: &mut FrameBuffer, palette: &TilePalette, l: &BoardLayout, row: usize, col: usize, tile: Option<u32>) {
    let (x, y) = l.tile_origin(row, col);
    let (w, h) = l.tile_size();
    let fill = palette.cell_color(tile);
    let style = CellStyle::new(text_color(fill), fill).with_bold();
    fb.fill_rect(x, y, w, h, ' ', style);

    let mid = y.saturating_add((h - 1) / 2);
    let Some(value) = tile else {
        let dot = CellStyle::new(EMPTY_DOT, fill).with_dim();
        fb.put_char(x.saturating_add((w - 1) / 2), mid, '·', dot);
        return;
    };

    let digits = digit_count(u64::from(value));
    if digits <= w {
        fb.put_u32(x.saturating_add((w - digits) / 2), mid, value, style);
    } else {
        // Too wide: show the exponent instead.
        let rank = tile_rank(value);
        let label_w = 2 + digit_count(u64::from(rank));
        let lx = x.saturating_add(w.saturating_sub(label_w) / 2);
        let n = fb.put_str(lx, mid, "2^", style);
        fb.put_u32(lx.saturating_add(n), mid, rank, style);
    }
}

/// Label over value, one blank row between entries, then key hints.
fn draw_side_panel(fb: &mut FrameBuffer, snap: &GameSnapshot, l: &BoardLayout, viewport: Viewport) {
    let x = l.right().saturating_add(2);
    if viewport.width.saturating_sub(x) < PANEL_MIN_W {
        return;
    }

    let numbers = [
        ("SCORE", Some(snap.score)),
        ("BEST", (snap.best_tile > 0).then_some(u64::from(snap.best_tile))),
        ("MOVES", Some(u64::from(snap.moves))),
        ("GAME", Some(u64::from(snap.episode_id) + 1)),
    ];
    let mut y = l.y;
    for (label, value) in numbers {
        fb.put_str(x, y, label, PANEL_LABEL);
        match value {
            Some(v) => fb.put_u64(x, y.saturating_add(1), v, PANEL_VALUE),
            None => fb.put_str(x, y.saturating_add(1), "-", PANEL_VALUE),
        };
        y = y.saturating_add(3);
    }

    fb.put_str(x, y, "LAST", PANEL_LABEL);
    let last = snap.last_direction.map_or("-", |d| d.as_str());
    fb.put_str(x, y.saturating_add(1), last, PANEL_VALUE);
    y = y.saturating_add(3);

    if y.saturating_add(HINTS.len() as u16) <= viewport.height {
        for (dy, hint) in (0..).zip(HINTS) {
            fb.put_str(x, y + dy, hint, PANEL_VALUE.with_dim());
        }
    }
}

/// Three-row banner across the middle of the board.
fn draw_game_over(fb: &mut FrameBuffer, snap: &GameSnapshot, l: &BoardLayout) {
    let mid = l.middle_row();
    let top = mid.saturating_sub(1);
    fb.fill_rect(l.x + 1, top, l.width.saturating_sub(2), 3, ' ', BANNER);

    put_centered(fb, l, top, "GAME OVER", BANNER.with_bold());

    let prefix = "SCORE ";
    let score_w = prefix.len() as u16 + digit_count(snap.score);
    let x = l.x.saturating_add(l.width.saturating_sub(score_w) / 2);
    let n = fb.put_str(x, mid, prefix, BANNER);
    fb.put_u64(x.saturating_add(n), mid, snap.score, BANNER.with_bold());

    put_centered(fb, l, mid.saturating_add(1), "r: play again", BANNER);
}

fn put_centered(fb: &mut FrameBuffer, l: &BoardLayout, y: u16, text: &str, style: CellStyle) {
    let text_w = text.chars().count() as u16;
    let x = l.x.saturating_add(l.width.saturating_sub(text_w) / 2);
    fb.put_str(x, y, text, style);
}
