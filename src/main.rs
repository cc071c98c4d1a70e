//! Headless driver: generates a random build-up, plans it, and logs the ball's
//! progress tick by tick.
use std::{path::PathBuf, thread, time::Duration};

use anyhow::Result;
use buildup::{
  run_playback, EventSource, Frame, FrameScheduler, InputEvent, Pitch,
  PlayConfig, PlayOutcome, Renderer,
};
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;

#[derive(Parser, Debug)]
#[command(version, about = "Plans and plays back a soccer build-up")]
struct Args {
  /// TOML file overriding the default pitch and playback settings.
  #[arg(long)]
  config: Option<PathBuf>,
  /// Seed for player placement.
  #[arg(long)]
  seed: Option<u64>,
  /// Distance the ball covers per tick, in pixels.
  #[arg(long)]
  speed: Option<f64>,
  /// Milliseconds between ticks.
  #[arg(long)]
  frame_ms: Option<u64>,
  /// Quit after this many ticks, as if the quit key had been pressed.
  #[arg(long)]
  max_ticks: Option<u64>,
}

struct SleepScheduler(Duration);

impl FrameScheduler for SleepScheduler {
  fn wait_for_next_frame(&mut self) {
    thread::sleep(self.0);
  }
}

/// Emits a quit once `remaining` ticks have been played.
struct TickBudget {
  remaining: Option<u64>,
}

impl EventSource for TickBudget {
  fn poll(&mut self) -> Vec<InputEvent> {
    match &mut self.remaining {
      Some(0) => vec![InputEvent::Quit],
      Some(remaining) => {
        *remaining -= 1;
        Vec::new()
      }
      None => Vec::new(),
    }
  }
}

struct LogRenderer;

impl Renderer for LogRenderer {
  fn render(&mut self, frame: &Frame<'_>) {
    match frame {
      Frame::Playing { report, notation } => info!(
        tick = report.tick,
        state = report.state.tag(),
        segment = report.segment,
        x = report.ball.x(),
        y = report.ball.y(),
        cost = report.running_cost,
        "{notation}"
      ),
      Frame::NoScoringOption => info!("no scoring option"),
    }
  }
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into()),
    )
    .with_writer(std::io::stderr)
    .init();

  let args = Args::parse();
  let mut config = match &args.config {
    Some(path) => PlayConfig::load(path)?,
    None => PlayConfig::default(),
  };
  if let Some(speed) = args.speed {
    config.ball_speed = speed;
  }
  if let Some(frame_ms) = args.frame_ms {
    config.frame_time_ms = frame_ms;
  }
  config.seed = args.seed.or(config.seed);
  config.validate()?;

  let mut rng = match config.seed {
    Some(seed) => StdRng::seed_from_u64(seed),
    None => StdRng::from_os_rng(),
  };
  let pitch = Pitch::new(&config)?;
  let scenario =
    pitch.random_scenario(&mut rng, config.team_size, config.collision_radius)?;
  let plan = scenario.plan()?;

  match plan.outcome() {
    PlayOutcome::Scoring(best) => info!(
      cost = best.cost,
      assist = best.assist().map(|index| index + 1),
      alternatives = plan.ranked_paths().len() - 1,
      "playing {}",
      best.notation()
    ),
    PlayOutcome::NoScoringOption => {}
  }

  let summary = run_playback(
    &plan,
    config.ball_speed,
    &mut TickBudget { remaining: args.max_ticks },
    &mut SleepScheduler(Duration::from_millis(config.frame_time_ms)),
    &mut LogRenderer,
  )?;
  info!(?summary, "done");
  Ok(())
}
