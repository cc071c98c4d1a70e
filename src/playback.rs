use tracing::info;

use crate::{
  simulator::{InputEvent, MotionState, TickReport},
  Plan, PlayError,
};

/// Supplies the input that arrived since the last tick, e.g. a quit key.
pub trait EventSource {
  fn poll(&mut self) -> Vec<InputEvent>;
}

/// Blocks until the next tick is due.
pub trait FrameScheduler {
  fn wait_for_next_frame(&mut self);
}

/// Draws whatever playback has to show.
pub trait Renderer {
  fn render(&mut self, frame: &Frame<'_>);
}

/// One frame of output for a [`Renderer`].
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Frame<'a> {
  Playing {
    report: TickReport,
    /// The chosen play, e.g. `Kicker -> 2 -> Goal`.
    notation: &'a str,
  },
  /// Shown once, instead of any animation.
  NoScoringOption,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PlaybackSummary {
  pub ticks: u64,
  pub cancelled: bool,
  /// The distance travelled by the ball, or None if nothing was played.
  pub final_cost: Option<f64>,
}

/// Plays back the best path of `plan` until the ball reaches the goal line or
/// `events` asks to quit. Each tick polls `events`, advances the ball, renders
/// a frame and then waits on `scheduler`.
pub fn run_playback(
  plan: &Plan,
  speed: f64,
  events: &mut impl EventSource,
  scheduler: &mut impl FrameScheduler,
  renderer: &mut impl Renderer,
) -> Result<PlaybackSummary, PlayError> {
  let (Some(best), Some(mut simulator)) = (plan.best(), plan.simulator(speed)?)
  else {
    renderer.render(&Frame::NoScoringOption);
    return Ok(PlaybackSummary { ticks: 0, cancelled: false, final_cost: None });
  };
  let notation = best.notation();

  let mut ticks = 0;
  loop {
    let Some(report) = simulator.tick(&events.poll()) else {
      info!(ticks, "playback cancelled");
      return Ok(PlaybackSummary {
        ticks,
        cancelled: true,
        final_cost: Some(simulator.running_cost(simulator.cursor())),
      });
    };
    ticks = report.tick;
    renderer.render(&Frame::Playing { report, notation: &notation });

    if report.state == MotionState::Done {
      info!(ticks, cost = report.running_cost, "ball reached the goal line");
      return Ok(PlaybackSummary {
        ticks,
        cancelled: false,
        final_cost: Some(report.running_cost),
      });
    }
    scheduler.wait_for_next_frame();
  }
}

#[cfg(test)]
#[path = "playback_test.rs"]
mod test;
