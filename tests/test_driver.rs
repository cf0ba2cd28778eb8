use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use dino_runner::compute::{frame_interval, MAX_JUMPS};
use dino_runner::driver::*;
use dino_runner::entities::*;
use dino_runner::primitives::NativePrimitives;
use dino_runner::render::Frame;

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Feeds one batch of commands per frame and records what the loop shows.
/// Once the script runs out it asks to quit.
struct ScriptedPlatform {
    script: VecDeque<Vec<Command>>,
    pending: VecDeque<Command>,
    frames: Vec<Frame>,
    pauses: Vec<Duration>,
}

impl ScriptedPlatform {
    fn new(script: Vec<Vec<Command>>) -> Self {
        let mut platform = Self {
            script: script.into(),
            pending: VecDeque::new(),
            frames: Vec::new(),
            pauses: Vec::new(),
        };
        platform.load_next_batch();
        platform
    }

    fn load_next_batch(&mut self) {
        self.pending = self
            .script
            .pop_front()
            .unwrap_or_else(|| vec![Command::Quit])
            .into();
    }
}

impl Platform for ScriptedPlatform {
    fn poll_command(&mut self) -> Option<Command> {
        self.pending.pop_front()
    }

    fn present(&mut self, frame: &Frame) -> io::Result<()> {
        self.frames.push(frame.clone());
        self.load_next_batch();
        Ok(())
    }

    fn pause(&mut self, interval: Duration) {
        self.pauses.push(interval);
    }
}

fn play(script: Vec<Vec<Command>>) -> (WorldState, ScriptedPlatform) {
    let mut platform = ScriptedPlatform::new(script);
    let mut rng = StdRng::seed_from_u64(42);
    let last = run(&mut platform, &mut rng, &NativePrimitives).unwrap();
    (last, platform)
}

// ── TickInput ─────────────────────────────────────────────────────────────────

#[test]
fn tick_input_collapses_repeated_jumps() {
    let mut input = TickInput::default();
    input.push(Command::Jump);
    input.push(Command::Jump);
    assert_eq!(input, TickInput { jump: true, restart: false, quit: false });
}

#[test]
fn drain_input_stops_at_quit() {
    let mut platform = ScriptedPlatform::new(vec![vec![Command::Quit, Command::Jump]]);
    let input = drain_input(&mut platform);
    assert!(input.quit);
    assert!(!input.jump);
    assert_eq!(platform.poll_command(), Some(Command::Jump));
}

// ── run ───────────────────────────────────────────────────────────────────────

#[test]
fn quit_before_first_frame() {
    let (last, platform) = play(vec![vec![Command::Quit]]);
    assert_eq!(last.score, 0);
    assert!(platform.frames.is_empty());
    assert!(platform.pauses.is_empty());
}

#[test]
fn one_tick_and_one_frame_per_iteration() {
    let (last, platform) = play(vec![vec![]; 10]);
    assert_eq!(last.score, 10);
    assert_eq!(platform.frames.len(), 10);
    assert_eq!(platform.frames[9].status.score, 10);
    assert!(platform.pauses.iter().all(|&d| d == frame_interval(0)));
}

#[test]
fn jumps_in_one_poll_count_once() {
    let (last, _) = play(vec![vec![Command::Jump, Command::Jump, Command::Jump]]);
    assert!(last.actor.airborne);
    assert_eq!(last.actor.jumps_left, MAX_JUMPS - 1);
}

#[test]
fn restart_starts_a_fresh_world() {
    let (last, platform) = play(vec![vec![], vec![], vec![], vec![Command::Restart]]);
    assert_eq!(platform.frames[2].status.score, 3);
    // Reset, then ticked once in the same iteration
    assert_eq!(last.score, 1);
    assert_eq!(last.lives, 3);
}

#[test]
fn frames_carry_the_rendered_world() {
    let (_, platform) = play(vec![vec![]]);
    let frame = &platform.frames[0];
    assert_eq!(frame.status.lives, 3);
    assert!(!frame.status.game_over);
    assert_eq!(frame.canvas.get(6, 15), Some('#'));
}
