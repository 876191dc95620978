use std::io;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use glam::Vec2;
use log::info;
use ratatui::backend::CrosstermBackend;
use scopeguard::defer;

use soul_guardian::{
    GameConfig, GameRng, InputSource, Renderer, Simulation, TerminalInput, TerminalRenderer,
    logging,
    renderer::{Clock, GameClock},
};

/// Top-down dungeon shooter for the terminal
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Fixed RNG seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Write log output to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() {
    if let Err(err) = run(Args::parse()) {
        eprintln!("soul_guardian: {err:#}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let mut config =
        GameConfig::load_or_default(args.config.as_deref()).context("Failed to load config")?;
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    logging::init(args.verbose, args.log_file.as_deref()).context("Failed to set up logging")?;

    let seed = config.seed.unwrap_or_else(GameRng::clock_seed);
    info!("starting with seed {seed}");
    let clock = GameClock::new(config.frame_duration());
    let cell = Vec2::new(config.cell_width, config.cell_height);
    let mut input = TerminalInput::new(config.hold_window_frames(), cell);
    let mut simulation = Simulation::new(config, GameRng::new(seed));

    enable_raw_mode().context("Failed to enable raw mode")?;
    defer! {
        let _ = disable_raw_mode();
    }
    execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    defer! {
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
    }
    // Release events let held keys end immediately; not every terminal has them.
    let enhanced = execute!(
        io::stdout(),
        PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
    )
    .is_ok();
    defer! {
        if enhanced {
            let _ = execute!(io::stdout(), PopKeyboardEnhancementFlags);
        }
    }

    let mut renderer = TerminalRenderer::new(CrosstermBackend::new(io::stdout()), cell)
        .context("Failed to create terminal")?;
    renderer.init().context("Failed to initialise renderer")?;

    let result = frame_loop(&mut simulation, &mut input, &mut renderer, &clock);
    let _ = renderer.cleanup();
    result?;

    info!(
        "exiting after {} frames, score {}",
        simulation.frames(),
        simulation.progress().score
    );
    Ok(())
}

fn frame_loop(
    simulation: &mut Simulation,
    input: &mut impl InputSource,
    renderer: &mut impl Renderer,
    clock: &impl Clock,
) -> Result<()> {
    while !simulation.quit_requested() {
        let started = clock.now();
        let frame = input.poll_frame().context("Failed to read input")?;
        simulation.step(frame);
        renderer
            .draw(&simulation.scene(), &simulation.hud())
            .context("Failed to draw frame")?;
        let elapsed = clock.now().duration_since(started);
        if let Some(rest) = clock.tick_rate().checked_sub(elapsed) {
            clock.sleep(rest);
        }
    }
    Ok(())
}
