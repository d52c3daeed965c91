//! Character-cell framebuffer the game view draws into.
//!
//! Coordinates are terminal columns and rows from the top-left corner. All
//! writes are clipped to the buffer, so callers can draw a board that only
//! partly fits the terminal without bounds checks of their own.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Perceived brightness in 0..=255 (Rec. 601 weights).
    pub fn luma(self) -> u8 {
        let l = 299 * u32::from(self.r) + 587 * u32::from(self.g) + 114 * u32::from(self.b);
        (l / 1000) as u8
    }
}

/// Colors and attributes of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
            dim: false,
        }
    }

    pub const fn with_bold(self) -> Self {
        Self { bold: true, ..self }
    }

    pub const fn with_dim(self) -> Self {
        Self { dim: true, ..self }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Cell {
    pub const fn new(ch: char, style: CellStyle) -> Self {
        Self { ch, style }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new(' ', CellStyle::default())
    }
}

/// Row-major grid of styled cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); usize::from(width) * usize::from(height)],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Change the dimensions, keeping the allocation when it is big enough.
    ///
    /// Cell contents are unspecified afterwards; callers repaint with
    /// [`FrameBuffer::fill`].
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.size() != (width, height) {
            self.width = width;
            self.height = height;
            self.cells
                .resize(usize::from(width) * usize::from(height), Cell::default());
        }
    }

    /// Rows top to bottom. Yields nothing for a zero-sized buffer.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(usize::from(self.width.max(1)))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.index(x, y).map(|i| self.cells[i])
    }

    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = Cell::new(ch, style);
        }
    }

    /// Write `s` left to right. Returns the number of columns written.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) -> u16 {
        let mut written = 0;
        for (cx, ch) in (x..self.width).zip(s.chars()) {
            self.put_char(cx, y, ch, style);
            written += 1;
        }
        written
    }

    /// Write a decimal number without allocating. Returns the digit count,
    /// including digits clipped off the right edge.
    pub fn put_u64(&mut self, x: u16, y: u16, value: u64, style: CellStyle) -> u16 {
        let len = digit_count(value);
        let mut n = value;
        for i in (0..len).rev() {
            let digit = char::from(b'0' + (n % 10) as u8);
            self.put_char(x.saturating_add(i), y, digit, style);
            n /= 10;
        }
        len
    }

    pub fn put_u32(&mut self, x: u16, y: u16, value: u32, style: CellStyle) -> u16 {
        self.put_u64(x, y, u64::from(value), style)
    }

    /// Fill a `w x h` rectangle, clipped to the buffer.
    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        let x_end = x.saturating_add(w).min(self.width);
        let y_end = y.saturating_add(h).min(self.height);
        if x >= x_end {
            return;
        }
        let cell = Cell::new(ch, style);
        for row in y..y_end {
            let base = usize::from(row) * usize::from(self.width);
            self.cells[base + usize::from(x)..base + usize::from(x_end)].fill(cell);
        }
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| usize::from(y) * usize::from(self.width) + usize::from(x))
    }
}

/// Number of decimal digits in `value`.
pub fn digit_count(value: u64) -> u16 {
    value.checked_ilog10().map_or(1, |l| l as u16 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fb: &FrameBuffer, y: u16) -> String {
        (0..fb.width()).filter_map(|x| fb.get(x, y)).map(|c| c.ch).collect()
    }

    #[test]
    fn put_u64_writes_digits_in_order() {
        let mut fb = FrameBuffer::new(8, 1);
        let n = fb.put_u64(1, 0, 2048, CellStyle::default());
        assert_eq!(n, 4);
        assert_eq!(row(&fb, 0), " 2048   ");

        let n = fb.put_u32(0, 0, 0, CellStyle::default());
        assert_eq!(n, 1);
        assert_eq!(fb.get(0, 0).map(|c| c.ch), Some('0'));
    }

    #[test]
    fn writes_outside_the_buffer_are_clipped() {
        let mut fb = FrameBuffer::new(3, 1);
        assert_eq!(fb.put_str(1, 0, "abcdef", CellStyle::default()), 2);
        fb.put_u64(2, 5, 99, CellStyle::default());
        assert_eq!(row(&fb, 0), " ab");
    }

    #[test]
    fn fill_rect_clips_to_the_right_and_bottom_edges() {
        let mut fb = FrameBuffer::new(4, 3);
        fb.fill_rect(2, 1, 10, 10, '#', CellStyle::default());
        assert_eq!(row(&fb, 0), "    ");
        assert_eq!(row(&fb, 1), "  ##");
        assert_eq!(row(&fb, 2), "  ##");

        fb.fill_rect(9, 0, 2, 2, '!', CellStyle::default());
        assert_eq!(row(&fb, 0), "    ");
    }

    #[test]
    fn rows_follow_resize() {
        let mut fb = FrameBuffer::new(3, 2);
        assert_eq!(fb.rows().count(), 2);
        fb.resize(5, 4);
        assert!(fb.rows().all(|r| r.len() == 5));
        assert_eq!(fb.rows().count(), 4);
        fb.resize(0, 0);
        assert_eq!(fb.rows().count(), 0);
    }

    #[test]
    fn style_builders_only_touch_their_attribute() {
        let base = CellStyle::new(Rgb::new(1, 2, 3), Rgb::new(4, 5, 6));
        let bold = base.with_bold();
        assert!(bold.bold && !bold.dim);
        assert_eq!((bold.fg, bold.bg), (base.fg, base.bg));
        assert!(base.with_dim().dim);
    }

    #[test]
    fn digit_count_matches_formatting() {
        for v in [0u64, 9, 10, 99, 100, 2048, 131072, u64::MAX] {
            assert_eq!(digit_count(v) as usize, v.to_string().len());
        }
    }

    #[test]
    fn luma_orders_black_below_white() {
        assert_eq!(Rgb::new(0, 0, 0).luma(), 0);
        assert_eq!(Rgb::new(255, 255, 255).luma(), 255);
        assert!(Rgb::new(0, 255, 0).luma() > Rgb::new(0, 0, 255).luma());
    }
}
