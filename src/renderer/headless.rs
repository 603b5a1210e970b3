//! GPU-less render sink
//!
//! Tessellates every frame like the wgpu path does but keeps the vertices in
//! memory. Used by the native demo and by tests.

use super::scene::build_scene;
use super::vertex::{Palette, Vertex};
use crate::sinks::{GameOverOverlay, RenderSink, Snapshot};

#[derive(Debug, Clone, Default)]
pub struct HeadlessRenderer {
    palette: Palette,
    frames: u64,
    ended_frames: u64,
    last_frame: Vec<Vertex>,
    overlay: GameOverOverlay,
}

impl HeadlessRenderer {
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            ..Default::default()
        }
    }

    /// Frames rendered so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Frames rendered with the end-of-run panel showing
    pub fn ended_frames(&self) -> u64 {
        self.ended_frames
    }

    /// Game-over screen state as of the last frame
    pub fn overlay(&self) -> &GameOverOverlay {
        &self.overlay
    }

    /// Vertices of the most recent frame
    pub fn last_frame(&self) -> &[Vertex] {
        &self.last_frame
    }
}

impl RenderSink for HeadlessRenderer {
    fn render(&mut self, snapshot: &Snapshot<'_>) {
        self.last_frame = build_scene(snapshot, &self.palette);
        if let Some(change) = self.overlay.update(snapshot) {
            log::debug!("Game-over screen: {change:?}");
        }
        self.frames += 1;
        if snapshot.is_ended() {
            self.ended_frames += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameWorld;

    #[test]
    fn test_counts_frames() {
        let mut world = GameWorld::with_seed(5);
        let mut renderer = HeadlessRenderer::default();

        renderer.render(&world.snapshot());
        world.run.end();
        renderer.render(&world.snapshot());

        assert_eq!(renderer.frames(), 2);
        assert_eq!(renderer.ended_frames(), 1);
        assert!(renderer.overlay().is_visible());
        assert!(!renderer.last_frame().is_empty());
    }

    #[test]
    fn test_uses_palette() {
        let world = GameWorld::with_seed(5);
        let mut renderer = HeadlessRenderer::new(Palette::HIGH_CONTRAST);
        renderer.render(&world.snapshot());
        assert_eq!(renderer.last_frame()[0].color, Palette::HIGH_CONTRAST.sky_top);
    }
}
