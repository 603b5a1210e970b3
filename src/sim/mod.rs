//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one tick per display refresh)
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod motion;
pub mod physics;
pub mod spawner;
pub mod state;
pub mod tick;
pub mod tuning;

pub use collision::{Aabb, first_collision};
pub use state::{GameEvent, GameWorld, JumpOutcome, Obstacle, Player, RunState, RunStatus};
pub use tick::{TickInput, tick};
pub use tuning::Tuning;
