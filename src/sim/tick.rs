//! Fixed timestep simulation tick
//!
//! Core game loop that advances the world deterministically. Commands
//! gathered between ticks are applied first, then the systems run in a fixed
//! order: physics, spawning, obstacle motion, collision.

use super::state::{GameEvent, GameWorld};
use super::{autopilot, collision, motion, physics, spawner};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Jump, or restart when the run is over (space/click/tap)
    pub jump: bool,
    /// Start a new run (restart button)
    pub reset: bool,
    /// Idle/demo mode - autopilot jumps over obstacles
    pub autopilot: bool,
}

impl TickInput {
    /// Drop the one-shot commands once they have been applied
    pub fn clear_one_shots(&mut self) {
        self.jump = false;
        self.reset = false;
    }
}

/// Advance the world by one tick
pub fn tick(world: &mut GameWorld, input: &TickInput) {
    if input.reset {
        world.reset_game();
    }
    if input.jump || (input.autopilot && autopilot::wants_jump(world)) {
        world.request_jump();
    }

    // Ended runs stay frozen; the host still renders them
    if !world.run.is_running() {
        return;
    }

    world.run.frame += 1;

    physics::integrate(&mut world.player, world.tuning.gravity, world.tuning.ground_y);

    if spawner::should_spawn(world.run.frame, &world.tuning) {
        let obstacle = spawner::spawn_obstacle(&mut world.rng, &world.tuning);
        log::debug!(
            "Frame {}: spawned {:.1}x{:.1} obstacle at speed {:.2}",
            world.run.frame,
            obstacle.size.x,
            obstacle.size.y,
            obstacle.speed
        );
        world.events.push(GameEvent::ObstacleSpawned {
            width: obstacle.size.x,
            height: obstacle.size.y,
            speed: obstacle.speed,
        });
        world.obstacles.push(obstacle);
    }

    motion::advance_obstacles(&mut world.obstacles, &mut world.run, &mut world.events);

    if collision::first_collision(&world.player, &world.obstacles).is_some() {
        world.run.end();
        world.events.push(GameEvent::Collision {
            score: world.run.score,
        });
        log::info!(
            "Game over at frame {} with score {} (best {})",
            world.run.frame,
            world.run.score,
            world.run.high_score
        );
    }
}
