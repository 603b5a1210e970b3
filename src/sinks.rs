//! Contracts between the simulation and its observers
//!
//! Sinks only ever see a borrowed `Snapshot`, so they cannot mutate the world
//! or hold on to it past the call.

use crate::sim::{Obstacle, Player, RunState, Tuning};

/// Read-only view of one tick's state
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub player: &'a Player,
    /// Live obstacles in spawn order
    pub obstacles: &'a [Obstacle],
    pub run: &'a RunState,
    /// Field geometry and constants the renderer needs
    pub tuning: &'a Tuning,
}

impl Snapshot<'_> {
    /// The run is over and the "ended" overlay should be shown
    pub fn is_ended(&self) -> bool {
        !self.run.is_running()
    }
}

/// Paints one frame. Called once per tick whether or not the run is active.
pub trait RenderSink {
    fn render(&mut self, snapshot: &Snapshot<'_>);
}

/// Receives `(score, high_score)` whenever either changes
pub trait ScoreSink {
    fn score_changed(&mut self, score: u32, high_score: u32);
}

/// Short human-readable score label
pub fn format_score_label(score: u32, high_score: u32) -> String {
    if high_score > 0 {
        format!("Score: {score} · Best: {high_score}")
    } else {
        format!("Score: {score}")
    }
}

/// Score sink that keeps the latest formatted label
#[derive(Debug, Clone, Default)]
pub struct ScoreLabel {
    pub text: String,
    /// Number of label refreshes
    pub updates: u32,
}

impl ScoreSink for ScoreLabel {
    fn score_changed(&mut self, score: u32, high_score: u32) {
        self.text = format_score_label(score, high_score);
        self.updates += 1;
    }
}

/// Instruction line shown under the field for the whole session
pub const HELP_TEXT: &str = "Dodge the lilac blocks · Each block cleared scores 1 point";
/// Headline of the game-over screen
pub const GAME_OVER_HEADLINE: &str = "Oops! Maintenance is still in progress.";
/// How to leave the game-over screen
pub const GAME_OVER_HINT: &str = "Press Restart game or the spacebar to try again.";

/// Final score line of the game-over screen
pub fn final_score_text(score: u32) -> String {
    format!("Final score: {score}")
}

/// What a host has to do to its game-over screen after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayChange {
    /// Run just ended with this score
    Show { score: u32 },
    /// A new run started
    Hide,
}

/// Tracks whether the game-over screen is up.
///
/// Hosts feed it every snapshot they render and only touch their UI when
/// `update` reports a change.
#[derive(Debug, Clone, Default)]
pub struct GameOverOverlay {
    visible: bool,
    final_score: u32,
}

impl GameOverOverlay {
    pub fn update(&mut self, snapshot: &Snapshot<'_>) -> Option<OverlayChange> {
        match (self.visible, snapshot.is_ended()) {
            (false, true) => {
                self.visible = true;
                self.final_score = snapshot.run.score;
                Some(OverlayChange::Show {
                    score: self.final_score,
                })
            }
            (true, false) => {
                self.visible = false;
                Some(OverlayChange::Hide)
            }
            _ => None,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Score of the run that ended; only meaningful while visible
    pub fn final_score(&self) -> u32 {
        self.final_score
    }
}
