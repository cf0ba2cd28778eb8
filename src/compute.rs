//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `WorldState` (plus the injected RNG and primitives where needed) and
//! returns a brand-new `WorldState`. Side effects are limited to the RNG.

use std::time::Duration;

use log::{debug, info};
use rand::Rng;

use crate::collision::overlaps;
use crate::entities::{Actor, Cloud, GameStatus, Obstacle, ObstacleKind, Pylon, WorldState};
use crate::primitives::Primitives;
use crate::sprite::{CLOUD, DINO, GROUND_Y, WIDTH};

// ── Tuning ───────────────────────────────────────────────────────────────────

pub const LIVES_INIT: u32 = 3;
pub const INVINCIBLE_FRAMES: u32 = 12;
pub const MAX_JUMPS: u8 = 3;
pub const ACTOR_X: i32 = 6;

pub const PRIMARY_SPAWN_X: i32 = WIDTH as i32 - 3;
/// Obstacles at or left of this column are recycled.
pub const RESPAWN_EDGE: i32 = 1;

pub const SECONDARY_ACTIVATION_SCORE: u32 = 500;
pub const SECONDARY_SPAWN_X: i32 = WIDTH as i32 + 20;

pub const CLOUD_SPAWN_X: i32 = WIDTH as i32 - 12;
pub const CLOUD_SCROLL_PERIOD: u32 = 3;

const BASE_FRAME_US: u64 = 60_000;
const FRAME_STEP_US: u64 = 3_000;
const MIN_FRAME_US: u64 = 25_000;
const POINTS_PER_LEVEL: u32 = 100;

/// Launch velocity for the jump about to be spent, by charges remaining.
/// Later jumps in the same airtime kick harder.
pub fn jump_velocity(jumps_left: u8) -> i32 {
    match jumps_left {
        3 => -3,
        2 => -5,
        _ => -7,
    }
}

/// Top row of the actor when standing on the ground.
pub fn actor_resting_y() -> i32 {
    GROUND_Y - (DINO.height as i32 - 1)
}

/// Delay between ticks. Speeds up every 100 points, never below the floor.
pub fn frame_interval(score: u32) -> Duration {
    let level = u64::from(score / POINTS_PER_LEVEL);
    let us = BASE_FRAME_US
        .saturating_sub(level * FRAME_STEP_US)
        .max(MIN_FRAME_US);
    Duration::from_micros(us)
}

// ── Random choices ───────────────────────────────────────────────────────────

fn random_cactus(rng: &mut impl Rng) -> ObstacleKind {
    if rng.gen_range(0..2) == 0 {
        ObstacleKind::SmallCactus
    } else {
        ObstacleKind::LargeCactus
    }
}

fn random_cloud_y(rng: &mut impl Rng) -> i32 {
    rng.gen_range(1..=3)
}

fn random_secondary_gap(rng: &mut impl Rng) -> i32 {
    rng.gen_range(12..=29)
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the starting world: actor on the ground, one cactus at the right
/// edge, the pylon parked off-screen and inactive.
pub fn init_state(rng: &mut impl Rng) -> WorldState {
    WorldState {
        actor: Actor {
            x: ACTOR_X,
            y: actor_resting_y(),
            vy: 0,
            airborne: false,
            jumps_left: MAX_JUMPS,
            gravity_phase: 0,
        },
        primary: Obstacle {
            x: PRIMARY_SPAWN_X,
            kind: random_cactus(rng),
        },
        secondary: Pylon {
            x: SECONDARY_SPAWN_X,
            active: false,
        },
        cloud: Cloud {
            x: CLOUD_SPAWN_X,
            y: random_cloud_y(rng),
        },
        score: 0,
        lives: LIVES_INIT,
        invincible: 0,
        status: GameStatus::Playing,
    }
}

/// Throw the current world away and start over with fresh random choices.
pub fn restart(rng: &mut impl Rng) -> WorldState {
    info!("restart");
    init_state(rng)
}

// ── Per-tick pieces ──────────────────────────────────────────────────────────

fn apply_jump(actor: &Actor) -> Actor {
    if actor.jumps_left == 0 {
        return actor.clone();
    }
    Actor {
        airborne: true,
        vy: jump_velocity(actor.jumps_left),
        jumps_left: actor.jumps_left - 1,
        ..actor.clone()
    }
}

fn integrate(actor: &Actor) -> Actor {
    if !actor.airborne {
        return actor.clone();
    }
    let y = actor.y + actor.vy;
    let gravity_phase = actor.gravity_phase + 1;
    let vy = if gravity_phase % 2 == 0 { actor.vy + 1 } else { actor.vy };

    let moved = Actor {
        y,
        vy,
        gravity_phase,
        ..actor.clone()
    };
    if moved.bottom() < GROUND_Y {
        return moved;
    }
    // Landed: snap back and refill every jump.
    Actor {
        y: actor_resting_y(),
        vy: 0,
        airborne: false,
        jumps_left: MAX_JUMPS,
        gravity_phase: 0,
        ..actor.clone()
    }
}

fn scroll_primary(obstacle: &Obstacle, rng: &mut impl Rng, prims: &impl Primitives) -> Obstacle {
    let x = prims.dec(obstacle.x);
    if x > RESPAWN_EDGE {
        return Obstacle { x, ..obstacle.clone() };
    }
    let kind = random_cactus(rng);
    debug!("primary respawn as {:?}", kind);
    Obstacle {
        x: PRIMARY_SPAWN_X,
        kind,
    }
}

fn activate_secondary(pylon: &Pylon, score: u32) -> Pylon {
    if pylon.active || score <= SECONDARY_ACTIVATION_SCORE {
        return pylon.clone();
    }
    info!("secondary obstacle activated at score {}", score);
    Pylon {
        x: SECONDARY_SPAWN_X,
        active: true,
    }
}

fn scroll_secondary(pylon: &Pylon, rng: &mut impl Rng, prims: &impl Primitives) -> Pylon {
    if !pylon.active {
        return pylon.clone();
    }
    let x = prims.dec(pylon.x);
    if x > RESPAWN_EDGE {
        return Pylon { x, ..pylon.clone() };
    }
    let gap = random_secondary_gap(rng);
    debug!("secondary respawn with gap {}", gap);
    Pylon {
        x: WIDTH as i32 + gap,
        active: true,
    }
}

fn scroll_cloud(cloud: &Cloud, score: u32, rng: &mut impl Rng, prims: &impl Primitives) -> Cloud {
    let x = if score % CLOUD_SCROLL_PERIOD == 0 {
        prims.dec(cloud.x)
    } else {
        cloud.x
    };
    if x + (CLOUD.width as i32) < 0 {
        Cloud {
            x: WIDTH as i32,
            y: random_cloud_y(rng),
        }
    } else {
        Cloud { x, ..cloud.clone() }
    }
}

/// Whether the actor touches the primary obstacle, or the secondary one when
/// it is in play.
pub fn actor_hit(actor: &Actor, primary: &Obstacle, secondary: &Pylon) -> bool {
    let body = actor.placed();
    overlaps(&body, &primary.placed()) || (secondary.active && overlaps(&body, &secondary.placed()))
}

// ── Per-frame tick (RNG injected) ───────────────────────────────────────────

/// Advance the world by one tick. `jump` is the single jump intent collected
/// for this tick. A world in `GameOver` comes back unchanged.
pub fn tick(
    state: &WorldState,
    jump: bool,
    rng: &mut impl Rng,
    prims: &impl Primitives,
) -> WorldState {
    if state.status == GameStatus::GameOver {
        return state.clone();
    }

    // ── 1. Invincibility countdown ──────────────────────────────────────────
    let mut invincible = state.invincible.saturating_sub(1);

    // ── 2–3. Jump and physics ───────────────────────────────────────────────
    let actor = if jump {
        apply_jump(&state.actor)
    } else {
        state.actor.clone()
    };
    let actor = integrate(&actor);

    // ── 4–6. Obstacles ──────────────────────────────────────────────────────
    let primary = scroll_primary(&state.primary, rng, prims);
    let secondary = activate_secondary(&state.secondary, state.score);
    let secondary = scroll_secondary(&secondary, rng, prims);

    // ── 7. Background ───────────────────────────────────────────────────────
    let cloud = scroll_cloud(&state.cloud, state.score, rng, prims);

    // ── 8. Collision ────────────────────────────────────────────────────────
    let mut lives = state.lives;
    let mut status = GameStatus::Playing;
    if invincible == 0 && actor_hit(&actor, &primary, &secondary) {
        lives = lives.saturating_sub(1);
        invincible = INVINCIBLE_FRAMES;
        info!("hit at score {}, lives left {}", state.score, lives);
        if lives == 0 {
            status = GameStatus::GameOver;
            info!("game over with score {}", state.score);
        }
    }

    // ── 9. Score ────────────────────────────────────────────────────────────
    let score = prims.sat_add_u32(state.score, 1);

    WorldState {
        actor,
        primary,
        secondary,
        cloud,
        score,
        lives,
        invincible,
        status,
    }
}
