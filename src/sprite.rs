//! Character sprites and the fixed-size canvas they are stamped onto.

use crate::primitives::Primitives;

// ── Grid dimensions ───────────────────────────────────────────────────────────

pub const WIDTH: usize = 60;
pub const HEIGHT: usize = 25;
/// Row holding the ground line. Obstacles and the resting actor sit on it.
pub const GROUND_Y: i32 = HEIGHT as i32 - 2;

pub const BLANK: char = ' ';
pub const GROUND: char = '_';

// ── Sprites ───────────────────────────────────────────────────────────────────

/// An immutable character mask. A space is transparent, anything else solid.
#[derive(Debug, PartialEq, Eq)]
pub struct Sprite {
    pub rows: &'static [&'static str],
    pub width: usize,
    pub height: usize,
}

impl Sprite {
    /// Character at local `(x, y)`, or `None` outside the mask. Columns count
    /// characters, not bytes, so rows may hold any Unicode glyph.
    pub fn cell(&self, x: usize, y: usize) -> Option<char> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.rows.get(y).and_then(|row| row.chars().nth(x))
    }

    pub fn is_solid(&self, x: usize, y: usize) -> bool {
        matches!(self.cell(x, y), Some(c) if c != BLANK)
    }
}

pub static DINO: Sprite = Sprite {
    rows: &[
        "#####     ",
        "## ###    ",
        "#####     ",
        "#####___  ",
        "#####     ",
        "#####@#   ",
        "@######   ",
        "#####     ",
        "##  ##    ",
    ],
    width: 10,
    height: 9,
};

pub static CLOUD: Sprite = Sprite {
    rows: &[
        "   .--.   ",
        " .(    ). ",
        "(___.__)__",
    ],
    width: 10,
    height: 3,
};

pub static CACTUS_SMALL: Sprite = Sprite {
    rows: &[
        " | ",
        "-+-",
        " | ",
    ],
    width: 3,
    height: 3,
};

pub static CACTUS_LARGE: Sprite = Sprite {
    rows: &[
        "  |  ",
        "--+--",
        "  |  ",
    ],
    width: 5,
    height: 3,
};

pub static PYLON: Sprite = Sprite {
    rows: &[
        "  ^  ",
        " / \\ ",
        "/___\\",
        "  |  ",
    ],
    width: 5,
    height: 4,
};

// ── Canvas ────────────────────────────────────────────────────────────────────

/// `WIDTH × HEIGHT` character grid, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    cells: Vec<char>,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    pub fn new() -> Self {
        Self {
            cells: vec![BLANK; WIDTH * HEIGHT],
        }
    }

    /// Blank every cell.
    pub fn clear(&mut self, prims: &impl Primitives) {
        prims.fill(&mut self.cells, BLANK, WIDTH * HEIGHT);
    }

    /// Fill the ground row across the full width.
    pub fn draw_ground(&mut self, prims: &impl Primitives) {
        let start = GROUND_Y as usize * WIDTH;
        prims.fill_row(&mut self.cells[start..start + WIDTH], GROUND, WIDTH);
    }

    /// Copy every solid cell of `sprite` with its top-left corner at
    /// `(origin_x, origin_y)`. Cells landing outside the grid are dropped.
    pub fn stamp(&mut self, origin_x: i32, origin_y: i32, sprite: &Sprite) {
        for sy in 0..sprite.height {
            for sx in 0..sprite.width {
                let Some(ch) = sprite.cell(sx, sy).filter(|&c| c != BLANK) else {
                    continue;
                };
                if let Some(idx) = Self::index(origin_x + sx as i32, origin_y + sy as i32) {
                    self.cells[idx] = ch;
                }
            }
        }
    }

    pub fn get(&self, x: i32, y: i32) -> Option<char> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// One full row, or `None` past the bottom.
    pub fn row(&self, y: usize) -> Option<&[char]> {
        (y < HEIGHT).then(|| &self.cells[y * WIDTH..(y + 1) * WIDTH])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(WIDTH)
    }

    fn index(x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= WIDTH as i32 || y >= HEIGHT as i32 {
            return None;
        }
        Some(y as usize * WIDTH + x as usize)
    }
}
