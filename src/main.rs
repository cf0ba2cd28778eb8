mod display;

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use dino_runner::driver::run;
use dino_runner::primitives::NativePrimitives;

use display::TerminalSession;

#[derive(Parser, Debug)]
#[command(about = "Jump the cacti. SPACE = jump, r = restart, q = quit")]
struct Args {
    /// fixed RNG seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// write logs to this file (the screen is taken by the game)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("could not create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;

    let mut rng = match args.seed {
        Some(seed) => {
            log::info!("using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    // The session restores the terminal when dropped, on every exit path.
    let mut session = TerminalSession::start().context("terminal setup failed")?;
    let last = run(&mut session, &mut rng, &NativePrimitives).context("frame loop failed")?;
    drop(session);

    log::info!("final score {}", last.score);
    println!("Final score: {}", last.score);
    Ok(())
}
