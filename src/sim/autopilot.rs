//! Idle/demo mode - the game plays itself
//!
//! Jumps when the next obstacle is a fixed number of ticks away, which puts
//! the player near the top of the arc while the obstacle passes underneath.

use super::state::GameWorld;

/// How many ticks ahead of contact to take off
pub const LEAD_TICKS: f32 = 6.0;

/// Whether the autopilot wants to jump this tick
pub fn wants_jump(world: &GameWorld) -> bool {
    if !world.run.is_running() || !world.player.on_ground {
        return false;
    }

    let player_left = world.player.pos.x;
    let player_right = player_left + world.player.size.x;

    // Nearest obstacle that has not fully passed the player yet
    let next = world
        .obstacles
        .iter()
        .filter(|o| o.right() > player_left)
        .min_by(|a, b| a.pos.x.total_cmp(&b.pos.x));

    match next {
        Some(o) => {
            let gap = o.pos.x - player_right;
            gap >= 0.0 && gap <= o.speed * LEAD_TICKS
        }
        None => false,
    }
}
