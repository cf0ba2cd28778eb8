//! Sprite-vs-sprite hit testing.
//!
//! A cheap bounding-box prune runs first. Only when the boxes intersect are the
//! masks compared cell by cell over the shared rectangle.

use crate::sprite::Sprite;

/// A sprite placed on the grid by its top-left corner.
#[derive(Clone, Copy, Debug)]
pub struct Placed<'a> {
    pub x: i32,
    pub y: i32,
    pub sprite: &'a Sprite,
}

impl<'a> Placed<'a> {
    pub fn new(x: i32, y: i32, sprite: &'a Sprite) -> Self {
        Self { x, y, sprite }
    }

    fn right(&self) -> i32 {
        self.x + self.sprite.width as i32 - 1
    }

    fn bottom(&self) -> i32 {
        self.y + self.sprite.height as i32 - 1
    }

    fn is_solid_at(&self, x: i32, y: i32) -> bool {
        let (lx, ly) = (x - self.x, y - self.y);
        lx >= 0 && ly >= 0 && self.sprite.is_solid(lx as usize, ly as usize)
    }
}

/// Inclusive cell rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

/// Broad phase: the shared part of both bounding boxes, if any.
pub fn intersection(a: &Placed, b: &Placed) -> Option<Rect> {
    let rect = Rect {
        left: a.x.max(b.x),
        right: a.right().min(b.right()),
        top: a.y.max(b.y),
        bottom: a.bottom().min(b.bottom()),
    };
    if rect.left > rect.right || rect.top > rect.bottom {
        None
    } else {
        Some(rect)
    }
}

/// True when at least one cell is solid in both sprites.
pub fn overlaps(a: &Placed, b: &Placed) -> bool {
    let Some(rect) = intersection(a, b) else {
        return false;
    };
    (rect.top..=rect.bottom).any(|y| {
        (rect.left..=rect.right).any(|x| a.is_solid_at(x, y) && b.is_solid_at(x, y))
    })
}
