//! Procedural obstacle spawning
//!
//! The schedule is a pure function of the frame counter; geometry comes from
//! whatever RNG the caller passes in, so tests can seed it.

use std::ops::Range;

use glam::Vec2;
use rand::Rng;

use super::state::Obstacle;
use super::tuning::Tuning;

/// Whether an obstacle spawns on this (already incremented) frame
pub fn should_spawn(frame: u64, tuning: &Tuning) -> bool {
    frame.is_multiple_of(tuning.spawn_interval)
        || (frame > tuning.fast_spawn_after && frame.is_multiple_of(tuning.fast_spawn_interval))
}

/// Create an obstacle just past the right edge with random size and speed
pub fn spawn_obstacle<R: Rng + ?Sized>(rng: &mut R, tuning: &Tuning) -> Obstacle {
    let width = sample_span(rng, &tuning.obstacle_width);
    let height = sample_span(rng, &tuning.obstacle_height);
    let speed = sample_span(rng, &tuning.obstacle_speed);

    Obstacle::on_ground(
        tuning.spawn_x(),
        Vec2::new(width, height),
        speed,
        tuning.ground_y,
    )
}

/// Uniform sample from `[start, end)`.
///
/// `start + u * (end - start)` can round up to `end` in f32, so results that
/// land on the bound are pulled back to the largest float below it.
fn sample_span<R: Rng + ?Sized>(rng: &mut R, range: &Range<f32>) -> f32 {
    let u: f32 = rng.random();
    let value = range.start + u * (range.end - range.start);
    if value >= range.end {
        float_below(range.end)
    } else {
        value
    }
}

/// Largest f32 strictly below a positive finite `x`
fn float_below(x: f32) -> f32 {
    f32::from_bits(x.to_bits() - 1)
}
