//! Scene tessellation
//!
//! Turns a `Snapshot` into one triangle list in field coordinates, painted
//! back to front: sky, ground, obstacles, player, then the end-of-run panel.

use glam::Vec2;

use super::shapes;
use super::vertex::{Palette, Vertex};
use crate::sim::{Obstacle, Player};
use crate::sinks::Snapshot;

/// Thickness of the ground line
pub const GROUND_LINE_WIDTH: f32 = 3.0;
/// Horizontal spacing of the hatch marks below the ground line
pub const HATCH_SPACING: f32 = 12.0;
pub const PLAYER_CORNER_RADIUS: f32 = 6.0;
pub const OBSTACLE_CORNER_RADIUS: f32 = 5.0;

const CORNER_SEGMENTS: u32 = 4;

/// Build the vertices for one frame
pub fn build_scene(snapshot: &Snapshot<'_>, palette: &Palette) -> Vec<Vertex> {
    let tuning = snapshot.tuning;
    let field = Vec2::new(tuning.field_width, tuning.field_height);
    let mut vertices = Vec::with_capacity(1024);

    vertices.extend(shapes::gradient_rect(
        Vec2::ZERO,
        field,
        palette.sky_top,
        palette.sky_bottom,
    ));

    add_ground(&mut vertices, tuning.ground_y, tuning.field_width, palette);

    for obstacle in snapshot.obstacles {
        add_obstacle(&mut vertices, obstacle, palette);
    }

    add_player(&mut vertices, snapshot.player, palette);

    if snapshot.is_ended() {
        add_end_panel(&mut vertices, field, palette);
    }

    vertices
}

fn add_ground(vertices: &mut Vec<Vertex>, ground_y: f32, width: f32, palette: &Palette) {
    vertices.extend(shapes::line(
        Vec2::new(0.0, ground_y),
        Vec2::new(width, ground_y),
        GROUND_LINE_WIDTH,
        palette.ground,
    ));

    let mut x = 0.0;
    while x < width {
        vertices.extend(shapes::line(
            Vec2::new(x, ground_y + 3.0),
            Vec2::new(x + 6.0, ground_y + 7.0),
            1.0,
            palette.hatch,
        ));
        x += HATCH_SPACING;
    }
}

fn add_obstacle(vertices: &mut Vec<Vertex>, obstacle: &Obstacle, palette: &Palette) {
    vertices.extend(shapes::rounded_rect(
        obstacle.pos,
        obstacle.size,
        OBSTACLE_CORNER_RADIUS,
        palette.obstacle,
        CORNER_SEGMENTS,
    ));
}

fn add_player(vertices: &mut Vec<Vertex>, player: &Player, palette: &Palette) {
    let p = player.pos;
    vertices.extend(shapes::rounded_rect(
        p,
        player.size,
        PLAYER_CORNER_RADIUS,
        palette.player,
        CORNER_SEGMENTS,
    ));

    // Eyes
    let eye = Vec2::splat(3.0);
    vertices.extend(shapes::rect(p + Vec2::new(6.0, 6.0), eye, palette.face));
    vertices.extend(shapes::rect(p + Vec2::new(13.0, 6.0), eye, palette.face));

    // Smile
    vertices.extend(shapes::quadratic_curve(
        p + Vec2::new(9.0, 12.0),
        p + Vec2::new(12.0, 15.0),
        p + Vec2::new(15.0, 12.0),
        2.0,
        palette.smile,
        6,
    ));
}

fn add_end_panel(vertices: &mut Vec<Vertex>, field: Vec2, palette: &Palette) {
    let min = Vec2::new(50.0, 40.0);
    let size = Vec2::new(field.x - 100.0, 60.0);
    vertices.extend(shapes::rect(min, size, palette.overlay));
    vertices.extend(shapes::rect_outline(min, size, 1.0, palette.overlay_border));
}
