/// Monochrome 128x64 drawing surface.
///
/// Mirrors the primitive set of a small OLED driver: filled/outlined
/// rectangles, filled circles, lines, packed-bitmap blits and a tiny built-in
/// text face.  Every primitive clips at the edges, so callers never have to
/// range-check.  Presentation (getting the pixels onto something visible) is
/// someone else's job; see the terminal layer in the binary.

pub const FB_W: i32 = 128;
pub const FB_H: i32 = 64;

/// Pixel value on a two-color surface.  `Off` matters: sprite faces are
/// carved out of filled bodies with `Off` rectangles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shade {
    On,
    Off,
}

/// One row per u128, leftmost pixel in the most significant bit.
pub struct FrameBuffer {
    rows: [u128; FB_H as usize],
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self { rows: [0; FB_H as usize] }
    }

    pub fn clear(&mut self) {
        self.rows = [0; FB_H as usize];
    }

    pub fn get(&self, x: i32, y: i32) -> bool {
        if x < 0 || x >= FB_W || y < 0 || y >= FB_H {
            return false;
        }
        self.rows[y as usize] & (1 << (127 - x)) != 0
    }

    /// Set one pixel.  Out-of-range coordinates are silently dropped.
    pub fn set(&mut self, x: i32, y: i32, shade: Shade) {
        if x < 0 || x >= FB_W || y < 0 || y >= FB_H {
            return;
        }
        let bit = 1u128 << (127 - x);
        match shade {
            Shade::On => self.rows[y as usize] |= bit,
            Shade::Off => self.rows[y as usize] &= !bit,
        }
    }

    /// Count of lit pixels, handy for render smoke tests.
    pub fn lit(&self) -> u32 {
        self.rows.iter().map(|r| r.count_ones()).sum()
    }

    // ── Primitives ───────────────────────────────────────────────────────────

    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, shade: Shade) {
        for yy in y..y + h {
            for xx in x..x + w {
                self.set(xx, yy, shade);
            }
        }
    }

    pub fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, shade: Shade) {
        if w <= 0 || h <= 0 {
            return;
        }
        for xx in x..x + w {
            self.set(xx, y, shade);
            self.set(xx, y + h - 1, shade);
        }
        for yy in y..y + h {
            self.set(x, yy, shade);
            self.set(x + w - 1, yy, shade);
        }
    }

    pub fn fill_circle(&mut self, cx: i32, cy: i32, r: i32, shade: Shade) {
        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy <= r * r {
                    self.set(cx + dx, cy + dy, shade);
                }
            }
        }
    }

    /// Bresenham line, endpoints inclusive.
    pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, shade: Shade) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let (mut x, mut y) = (x0, y0);
        let mut err = dx + dy;
        loop {
            self.set(x, y, shade);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Blit a packed monochrome bitmap: rows of `ceil(w / 8)` bytes, most
    /// significant bit leftmost.  Set bits paint `On`, clear bits are
    /// transparent.
    pub fn blit(&mut self, x: i32, y: i32, w: i32, h: i32, data: &[u8]) {
        let stride = ((w + 7) / 8) as usize;
        for row in 0..h {
            for col in 0..w {
                let byte = data[row as usize * stride + (col / 8) as usize];
                if byte & (0x80 >> (col % 8)) != 0 {
                    self.set(x + col, y + row, Shade::On);
                }
            }
        }
    }

    /// Draw text in the built-in 3x5 face, scaled by an integer factor.
    /// Lowercase is folded to uppercase; characters outside the face render
    /// as blanks.  Advance is 4 pixels per character at scale 1.
    pub fn text(&mut self, x: i32, y: i32, scale: i32, s: &str) {
        let mut pen = x;
        for c in s.chars() {
            if let Some(rows) = glyph(c.to_ascii_uppercase()) {
                for (row, bits) in rows.iter().enumerate() {
                    for col in 0..3 {
                        if bits & (0b100 >> col) != 0 {
                            self.fill_rect(
                                pen + col * scale,
                                y + row as i32 * scale,
                                scale,
                                scale,
                                Shade::On,
                            );
                        }
                    }
                }
            }
            pen += 4 * scale;
        }
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

// ── 3x5 text face ────────────────────────────────────────────────────────────

// Each glyph is five rows, low three bits used, bit 2 = leftmost column.
fn glyph(c: char) -> Option<[u8; 5]> {
    let g = match c {
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b001, 0b010, 0b010],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        'A' => [0b010, 0b101, 0b111, 0b101, 0b101],
        'B' => [0b110, 0b101, 0b110, 0b101, 0b110],
        'C' => [0b011, 0b100, 0b100, 0b100, 0b011],
        'D' => [0b110, 0b101, 0b101, 0b101, 0b110],
        'E' => [0b111, 0b100, 0b110, 0b100, 0b111],
        'F' => [0b111, 0b100, 0b110, 0b100, 0b100],
        'G' => [0b011, 0b100, 0b101, 0b101, 0b011],
        'H' => [0b101, 0b101, 0b111, 0b101, 0b101],
        'I' => [0b111, 0b010, 0b010, 0b010, 0b111],
        'J' => [0b001, 0b001, 0b001, 0b101, 0b010],
        'K' => [0b101, 0b110, 0b100, 0b110, 0b101],
        'L' => [0b100, 0b100, 0b100, 0b100, 0b111],
        'M' => [0b101, 0b111, 0b111, 0b101, 0b101],
        'N' => [0b110, 0b101, 0b101, 0b101, 0b101],
        'O' => [0b010, 0b101, 0b101, 0b101, 0b010],
        'P' => [0b110, 0b101, 0b110, 0b100, 0b100],
        'Q' => [0b111, 0b101, 0b101, 0b111, 0b001],
        'R' => [0b110, 0b101, 0b110, 0b101, 0b101],
        'S' => [0b011, 0b100, 0b010, 0b001, 0b110],
        'T' => [0b111, 0b010, 0b010, 0b010, 0b010],
        'U' => [0b101, 0b101, 0b101, 0b101, 0b111],
        'V' => [0b101, 0b101, 0b101, 0b101, 0b010],
        'W' => [0b101, 0b101, 0b111, 0b111, 0b101],
        'X' => [0b101, 0b101, 0b010, 0b101, 0b101],
        'Y' => [0b101, 0b101, 0b010, 0b010, 0b010],
        'Z' => [0b111, 0b001, 0b010, 0b100, 0b111],
        ':' => [0b000, 0b010, 0b000, 0b010, 0b000],
        '!' => [0b010, 0b010, 0b010, 0b000, 0b010],
        '-' => [0b000, 0b000, 0b111, 0b000, 0b000],
        ' ' => [0b000; 5],
        _ => return None,
    };
    Some(g)
}
