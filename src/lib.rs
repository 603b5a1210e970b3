//! Lilac Runner - a side-scrolling block-dodging game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, run state)
//! - `session`: Host-facing driver that buffers commands and feeds the sinks
//! - `sinks`: Render and score sink contracts
//! - `renderer`: Scene tessellation, WebGPU pipeline and headless renderer
//! - `settings`: Host preferences and tuning loaded from JSON

pub mod error;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;
pub mod sinks;

pub use error::{RenderError, SettingsError, TuningError};
pub use session::Session;
pub use settings::Settings;
pub use sinks::{
    GameOverOverlay, OverlayChange, RenderSink, ScoreSink, Snapshot, format_score_label,
};

/// Game configuration constants
pub mod consts {
    /// Visible field dimensions (game units, origin top-left, y down)
    pub const FIELD_WIDTH: f32 = 480.0;
    pub const FIELD_HEIGHT: f32 = 150.0;
    /// Walking surface, 22 units above the bottom of the field
    pub const GROUND_Y: f32 = FIELD_HEIGHT - 22.0;

    /// Downward acceleration per tick
    pub const GRAVITY: f32 = 0.7;
    /// Vertical velocity applied by a jump (negative = up)
    pub const JUMP_FORCE: f32 = -10.2;

    /// Player defaults - fixed column, rests on the ground line
    pub const PLAYER_X: f32 = 35.0;
    pub const PLAYER_WIDTH: f32 = 26.0;
    pub const PLAYER_HEIGHT: f32 = 28.0;

    /// Obstacle geometry and speed, half-open ranges [min, max)
    pub const OBSTACLE_WIDTH_MIN: f32 = 16.0;
    pub const OBSTACLE_WIDTH_MAX: f32 = 30.0;
    pub const OBSTACLE_HEIGHT_MIN: f32 = 18.0;
    pub const OBSTACLE_HEIGHT_MAX: f32 = 34.0;
    pub const OBSTACLE_SPEED_MIN: f32 = 4.0;
    pub const OBSTACLE_SPEED_MAX: f32 = 5.2;

    /// Spawn cadence in ticks
    pub const SPAWN_INTERVAL: u64 = 70;
    /// Faster cadence that kicks in once the run is past `FAST_SPAWN_AFTER`
    pub const FAST_SPAWN_INTERVAL: u64 = 55;
    pub const FAST_SPAWN_AFTER: u64 = 300;
    /// New obstacles start this far past the right edge
    pub const SPAWN_MARGIN: f32 = 10.0;
}
