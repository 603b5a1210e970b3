//! Obstacle scrolling and lifecycle
//!
//! Obstacles move left by their own speed each tick. Once an obstacle's right
//! edge passes x = 0 it is removed and the run scores a point.

use super::state::{GameEvent, Obstacle, RunState};

/// Scroll every obstacle, drop the ones that left the field and score them.
///
/// Walks the set back to front so `remove` never shifts an unvisited entry.
/// Survivors keep their spawn order. Returns how many obstacles were cleared.
pub fn advance_obstacles(
    obstacles: &mut Vec<Obstacle>,
    run: &mut RunState,
    events: &mut Vec<GameEvent>,
) -> u32 {
    let mut cleared = 0;

    for i in (0..obstacles.len()).rev() {
        let obstacle = &mut obstacles[i];
        obstacle.pos.x -= obstacle.speed;

        if obstacle.is_off_screen() {
            obstacles.remove(i);
            run.add_point();
            cleared += 1;
            events.push(GameEvent::ObstacleCleared {
                score: run.score,
                high_score: run.high_score,
            });
            log::debug!("Obstacle cleared, score {}", run.score);
        }
    }

    cleared
}
