//! Host-facing game driver
//!
//! Input handlers only set flags on the pending `TickInput`; the next call
//! to `frame` applies them at the tick boundary, runs the simulation, tells
//! the score sink about score changes and finally renders.

use crate::sim::{GameEvent, GameWorld, TickInput, Tuning, tick};
use crate::sinks::{RenderSink, ScoreSink};

/// A running game: the world plus commands waiting for the next tick
#[derive(Debug, Clone)]
pub struct Session {
    world: GameWorld,
    input: TickInput,
}

impl Session {
    /// Panics on malformed tuning, see `GameWorld::new`
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        Self {
            world: GameWorld::new(tuning, seed),
            input: TickInput::default(),
        }
    }

    pub fn world(&self) -> &GameWorld {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut GameWorld {
        &mut self.world
    }

    /// Jump (or restart once the run is over) on the next tick.
    /// Several requests before that tick count as one.
    pub fn request_jump(&mut self) {
        self.input.jump = true;
    }

    /// Start a new run on the next tick
    pub fn request_reset(&mut self) {
        self.input.reset = true;
    }

    pub fn set_autopilot(&mut self, enabled: bool) {
        if self.input.autopilot != enabled {
            log::info!("Autopilot {}", if enabled { "on" } else { "off" });
        }
        self.input.autopilot = enabled;
    }

    pub fn autopilot(&self) -> bool {
        self.input.autopilot
    }

    /// Commands that will be applied on the next tick
    pub fn pending(&self) -> &TickInput {
        &self.input
    }

    /// Run one scheduled tick and feed the sinks.
    ///
    /// Returns the events the tick produced so the host can react to them.
    pub fn frame<R, S>(&mut self, renderer: &mut R, scores: &mut S) -> Vec<GameEvent>
    where
        R: RenderSink + ?Sized,
        S: ScoreSink + ?Sized,
    {
        tick(&mut self.world, &self.input);
        self.input.clear_one_shots();

        let events = self.world.drain_events();
        for event in &events {
            match *event {
                GameEvent::ObstacleCleared { score, high_score } => {
                    scores.score_changed(score, high_score);
                }
                GameEvent::Reset { high_score } => {
                    scores.score_changed(0, high_score);
                }
                _ => {}
            }
        }

        renderer.render(&self.world.snapshot());
        events
    }
}
