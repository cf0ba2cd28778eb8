//! All game entity types: pure data, no simulation logic.

use crate::collision::Placed;
use crate::sprite::{Sprite, CACTUS_LARGE, CACTUS_SMALL, CLOUD, DINO, GROUND_Y, PYLON};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// A single key intent coming from the platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Jump,
    Restart,
    Quit,
}

/// Shape of the primary obstacle, re-rolled on every respawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObstacleKind {
    SmallCactus,
    LargeCactus,
}

impl ObstacleKind {
    pub fn sprite(self) -> &'static Sprite {
        match self {
            ObstacleKind::SmallCactus => &CACTUS_SMALL,
            ObstacleKind::LargeCactus => &CACTUS_LARGE,
        }
    }
}

/// Top row that puts a sprite's bottom row on the ground.
fn ground_top(sprite: &Sprite) -> i32 {
    GROUND_Y - (sprite.height as i32 - 1)
}

// ── Actor ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Actor {
    /// Column of the left edge. Never changes during play.
    pub x: i32,
    /// Row of the top edge.
    pub y: i32,
    /// Rows per tick; negative is upward.
    pub vy: i32,
    pub airborne: bool,
    /// Jumps still available before the next landing.
    pub jumps_left: u8,
    /// Airborne tick counter; gravity applies on every even value.
    pub gravity_phase: u32,
}

impl Actor {
    pub fn sprite(&self) -> &'static Sprite {
        &DINO
    }

    pub fn placed(&self) -> Placed<'static> {
        Placed::new(self.x, self.y, &DINO)
    }

    pub fn bottom(&self) -> i32 {
        self.y + DINO.height as i32 - 1
    }
}

// ── Obstacles & scenery ───────────────────────────────────────────────────────

/// The cactus that is always on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Obstacle {
    pub x: i32,
    pub kind: ObstacleKind,
}

impl Obstacle {
    pub fn top_y(&self) -> i32 {
        ground_top(self.kind.sprite())
    }

    pub fn placed(&self) -> Placed<'static> {
        Placed::new(self.x, self.top_y(), self.kind.sprite())
    }
}

/// Taller second obstacle. Parked off-screen until the score passes the
/// activation threshold, then in play for the rest of the game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pylon {
    pub x: i32,
    pub active: bool,
}

impl Pylon {
    pub fn sprite(&self) -> &'static Sprite {
        &PYLON
    }

    pub fn top_y(&self) -> i32 {
        ground_top(&PYLON)
    }

    pub fn placed(&self) -> Placed<'static> {
        Placed::new(self.x, self.top_y(), &PYLON)
    }
}

/// Decorative background cloud. Never collides with anything.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cloud {
    pub x: i32,
    pub y: i32,
}

impl Cloud {
    pub fn sprite(&self) -> &'static Sprite {
        &CLOUD
    }
}

// ── Master world state ────────────────────────────────────────────────────────

/// The entire world. Cloneable so the pure step function can return a new
/// copy without mutating the original.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorldState {
    pub actor: Actor,
    pub primary: Obstacle,
    pub secondary: Pylon,
    pub cloud: Cloud,
    pub score: u32,
    pub lives: u32,
    /// Frames of damage immunity left after a hit.
    pub invincible: u32,
    pub status: GameStatus,
}
