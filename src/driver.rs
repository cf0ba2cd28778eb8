//! The frame loop, independent of any concrete terminal.

use std::io;
use std::time::Duration;

use log::info;
use rand::Rng;

use crate::compute::{frame_interval, init_state, restart, tick};
use crate::entities::{Command, GameStatus, WorldState};
use crate::primitives::Primitives;
use crate::render::{render, Frame};

/// What the frame loop needs from the outside world.
pub trait Platform {
    /// Next pending command, without blocking. `None` once drained.
    fn poll_command(&mut self) -> Option<Command>;

    /// Put a finished frame on the display.
    fn present(&mut self, frame: &Frame) -> io::Result<()>;

    /// End-of-tick delay.
    fn pause(&mut self, interval: Duration);
}

/// Commands collected during one poll phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickInput {
    pub jump: bool,
    pub restart: bool,
    pub quit: bool,
}

impl TickInput {
    pub fn push(&mut self, command: Command) {
        match command {
            Command::Jump => self.jump = true,
            Command::Restart => self.restart = true,
            Command::Quit => self.quit = true,
        }
    }
}

/// Drain everything pending. Stops early on quit since nothing after it matters.
pub fn drain_input<P: Platform>(platform: &mut P) -> TickInput {
    let mut input = TickInput::default();
    while let Some(command) = platform.poll_command() {
        input.push(command);
        if input.quit {
            break;
        }
    }
    input
}

/// Play until a quit command arrives. Returns the world as it was at that point.
pub fn run<P, R, M>(platform: &mut P, rng: &mut R, prims: &M) -> io::Result<WorldState>
where
    P: Platform,
    R: Rng,
    M: Primitives,
{
    let mut state = init_state(rng);
    info!("game started");

    loop {
        let input = drain_input(platform);
        if input.quit {
            info!("quit at score {}", state.score);
            return Ok(state);
        }
        if input.restart {
            state = restart(rng);
        }

        if state.status == GameStatus::Playing {
            state = tick(&state, input.jump, rng, prims);
        }

        platform.present(&render(&state, prims))?;
        platform.pause(frame_interval(state.score));
    }
}
