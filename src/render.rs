//! Projects a `WorldState` onto a `Frame`: the composited canvas plus the
//! status line. Nothing here touches the terminal or mutates the world.

use std::fmt;

use crate::entities::{GameStatus, WorldState};
use crate::primitives::Primitives;
use crate::sprite::{Canvas, WIDTH};

pub const LIFE_GLYPH: char = '♥';
pub const CONTROLS_HINT: &str = "(SPACE=jump, r=restart, q=quit)";
pub const GAME_OVER_BANNER: &str = "GAME OVER! Press 'r' to restart.";

/// Everything shown below the playfield.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusLine {
    pub score: u32,
    pub lives: u32,
    pub invincible: u32,
    pub game_over: bool,
}

/// Which piece of the status line a run of text belongs to. Terminal
/// front-ends colour by it; the plain-text form ignores it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusPart {
    Score,
    LivesLabel,
    Hearts,
    Invincible,
    Hint,
}

impl StatusLine {
    pub fn hearts(&self) -> String {
        std::iter::repeat(LIFE_GLYPH).take(self.lives as usize).collect()
    }

    /// The status line split into tagged runs, left to right. The
    /// invincibility counter only appears while it is running.
    pub fn parts(&self) -> Vec<(StatusPart, String)> {
        let mut parts = vec![
            (StatusPart::Score, format!("Score: {}", self.score)),
            (StatusPart::LivesLabel, "   Lives: ".to_string()),
            (StatusPart::Hearts, self.hearts()),
        ];
        if self.invincible > 0 {
            parts.push((StatusPart::Invincible, format!("   [INV {}]", self.invincible)));
        }
        parts.push((StatusPart::Hint, format!("   {}", CONTROLS_HINT)));
        parts
    }

    pub fn banner(&self) -> Option<&'static str> {
        self.game_over.then_some(GAME_OVER_BANNER)
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (_, text) in self.parts() {
            f.write_str(&text)?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub canvas: Canvas,
    pub status: StatusLine,
}

impl Frame {
    /// Horizontal border line, `+----…----+`.
    pub fn border() -> String {
        format!("+{}+", "-".repeat(WIDTH))
    }

    /// The canvas framed by a one-character border, top to bottom.
    pub fn bordered_rows(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.canvas.rows().count() + 2);
        out.push(Self::border());
        for row in self.canvas.rows() {
            let mut line = String::with_capacity(WIDTH + 2);
            line.push('|');
            line.extend(row.iter());
            line.push('|');
            out.push(line);
        }
        out.push(Self::border());
        out
    }
}

/// The actor blinks while invincible: hidden on odd remaining counts.
pub fn actor_visible(invincible: u32) -> bool {
    invincible == 0 || invincible % 2 == 0
}

/// Composite one frame. Later layers overwrite earlier ones.
pub fn render(state: &WorldState, prims: &impl Primitives) -> Frame {
    let mut canvas = Canvas::new();
    canvas.clear(prims);
    canvas.draw_ground(prims);

    canvas.stamp(state.cloud.x, state.cloud.y, state.cloud.sprite());

    let primary = state.primary.placed();
    canvas.stamp(primary.x, primary.y, primary.sprite);

    if state.secondary.active {
        let secondary = state.secondary.placed();
        canvas.stamp(secondary.x, secondary.y, secondary.sprite);
    }

    if actor_visible(state.invincible) {
        canvas.stamp(state.actor.x, state.actor.y, state.actor.sprite());
    }

    Frame {
        canvas,
        status: StatusLine {
            score: state.score,
            lives: state.lives,
            invincible: state.invincible,
            game_over: state.status == GameStatus::GameOver,
        },
    }
}
