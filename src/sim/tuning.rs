//! Data-driven game balance
//!
//! Every design constant the simulation reads is gathered here so a world can
//! be built from a JSON settings file. Defaults come from `crate::consts`.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::TuningError;

/// Design parameters for one simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub field_width: f32,
    pub field_height: f32,
    /// Vertical coordinate of the walking surface
    pub ground_y: f32,
    pub gravity: f32,
    pub jump_force: f32,

    pub player_x: f32,
    pub player_width: f32,
    pub player_height: f32,

    pub obstacle_width: Range<f32>,
    pub obstacle_height: Range<f32>,
    pub obstacle_speed: Range<f32>,

    pub spawn_interval: u64,
    pub fast_spawn_interval: u64,
    /// Frame after which `fast_spawn_interval` also triggers spawns
    pub fast_spawn_after: u64,
    pub spawn_margin: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            ground_y: GROUND_Y,
            gravity: GRAVITY,
            jump_force: JUMP_FORCE,

            player_x: PLAYER_X,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,

            obstacle_width: OBSTACLE_WIDTH_MIN..OBSTACLE_WIDTH_MAX,
            obstacle_height: OBSTACLE_HEIGHT_MIN..OBSTACLE_HEIGHT_MAX,
            obstacle_speed: OBSTACLE_SPEED_MIN..OBSTACLE_SPEED_MAX,

            spawn_interval: SPAWN_INTERVAL,
            fast_spawn_interval: FAST_SPAWN_INTERVAL,
            fast_spawn_after: FAST_SPAWN_AFTER,
            spawn_margin: SPAWN_MARGIN,
        }
    }
}

impl Tuning {
    /// X coordinate every new obstacle starts at
    #[inline]
    pub fn spawn_x(&self) -> f32 {
        self.field_width + self.spawn_margin
    }

    /// Check that the tuning describes a well-formed simulation
    pub fn validate(&self) -> Result<(), TuningError> {
        let scalars = [
            ("field width", self.field_width),
            ("field height", self.field_height),
            ("ground line", self.ground_y),
            ("gravity", self.gravity),
            ("jump force", self.jump_force),
            ("player x", self.player_x),
            ("player width", self.player_width),
            ("player height", self.player_height),
            ("spawn margin", self.spawn_margin),
        ];
        for (name, value) in scalars {
            if !value.is_finite() {
                return Err(TuningError::NotFinite { name, value });
            }
        }

        for (name, value) in [
            ("field width", self.field_width),
            ("field height", self.field_height),
            ("ground line", self.ground_y),
            ("gravity", self.gravity),
            ("player width", self.player_width),
            ("player height", self.player_height),
        ] {
            if value <= 0.0 {
                return Err(TuningError::NotPositive { name, value });
            }
        }

        if self.jump_force >= 0.0 {
            return Err(TuningError::JumpForceNotUpward(self.jump_force));
        }
        if self.ground_y > self.field_height {
            return Err(TuningError::GroundOutsideField {
                ground_y: self.ground_y,
                field_height: self.field_height,
            });
        }
        if self.player_height > self.ground_y {
            return Err(TuningError::PlayerTooTall {
                height: self.player_height,
                ground_y: self.ground_y,
            });
        }

        for (name, range) in [
            ("obstacle width", &self.obstacle_width),
            ("obstacle height", &self.obstacle_height),
            ("obstacle speed", &self.obstacle_speed),
        ] {
            check_range(name, range)?;
        }

        if self.spawn_interval == 0 {
            return Err(TuningError::ZeroInterval("spawn interval"));
        }
        if self.fast_spawn_interval == 0 {
            return Err(TuningError::ZeroInterval("fast spawn interval"));
        }

        Ok(())
    }
}

/// A sampling range must be finite, positive and non-empty
fn check_range(name: &'static str, range: &Range<f32>) -> Result<(), TuningError> {
    for value in [range.start, range.end] {
        if !value.is_finite() {
            return Err(TuningError::NotFinite { name, value });
        }
    }
    if range.start <= 0.0 {
        return Err(TuningError::NotPositive {
            name,
            value: range.start,
        });
    }
    if range.start >= range.end {
        return Err(TuningError::EmptyRange {
            name,
            start: range.start,
            end: range.end,
        });
    }
    Ok(())
}
