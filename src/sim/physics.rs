//! Vertical motion of the player
//!
//! Fixed per-tick step: velocities are in units per tick, no `dt`.

use super::state::Player;

/// Advance the player by one tick of gravity and clamp to the ground line
pub fn integrate(player: &mut Player, gravity: f32, ground_y: f32) {
    player.vy += gravity;
    player.pos.y += player.vy;

    if player.bottom() >= ground_y {
        player.rest_on(ground_y);
    } else {
        player.on_ground = false;
    }
}

/// Launch the player upward if standing. Returns whether the jump happened.
pub fn try_jump(player: &mut Player, jump_force: f32) -> bool {
    if !player.on_ground {
        return false;
    }
    player.vy = jump_force;
    player.on_ground = false;
    true
}
