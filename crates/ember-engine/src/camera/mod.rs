//! World-space camera.
//!
//! Renderables receive the camera in `draw` and submit their quads into it.
//! The backend reads [`Camera::draw_list`] and [`Camera::view`] to project the
//! recorded quads.

use crate::coords::{Vec2, Viewport};
use crate::scene::{DrawList, QuadDraw};

/// Visible world rectangle plus the draws recorded against it this frame.
///
/// The world height follows from the world width and the viewport aspect, so
/// world units stay square on screen.
#[derive(Debug)]
pub struct Camera {
    center: Vec2,
    world_width: f32,
    viewport: Viewport,
    draws: DrawList,
}

/// Projection parameters for the vertex stage.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CameraView {
    pub center: Vec2,
    /// Half of the visible world width and height.
    pub half_extent: Vec2,
}

impl Camera {
    pub fn new(center: Vec2, world_width: f32, viewport: Viewport) -> Self {
        Self {
            center,
            world_width,
            viewport,
            draws: DrawList::new(),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    #[inline]
    pub fn set_center(&mut self, x: f32, y: f32) {
        self.center = Vec2::new(x, y);
    }

    #[inline]
    pub fn world_width(&self) -> f32 {
        self.world_width
    }

    #[inline]
    pub fn set_world_width(&mut self, width: f32) {
        self.world_width = width;
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Call on window resize.
    #[inline]
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    #[inline]
    pub fn world_height(&self) -> f32 {
        self.world_width * self.viewport.aspect()
    }

    pub fn view(&self) -> CameraView {
        CameraView {
            center: self.center,
            half_extent: Vec2::new(self.world_width, self.world_height()) * 0.5,
        }
    }

    /// Records a quad for this frame.
    #[inline]
    pub fn submit(&mut self, draw: QuadDraw) {
        self.draws.push(draw);
    }

    #[inline]
    pub fn draw_list(&self) -> &DrawList {
        &self.draws
    }

    /// Drops this frame's draws. Call after rendering.
    #[inline]
    pub fn clear(&mut self) {
        self.draws.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_height_follows_viewport_aspect() {
        let cam = Camera::new(Vec2::zero(), 100.0, Viewport::new(800.0, 600.0));
        assert!((cam.world_height() - 75.0).abs() < 1e-4);
    }

    #[test]
    fn invalid_viewport_falls_back_to_square() {
        let cam = Camera::new(Vec2::zero(), 20.0, Viewport::new(0.0, 0.0));
        assert_eq!(cam.world_height(), 20.0);
    }

    #[test]
    fn view_reports_half_extents() {
        let mut cam = Camera::new(Vec2::new(5.0, 5.0), 40.0, Viewport::new(400.0, 200.0));
        cam.set_center(1.0, 2.0);
        let view = cam.view();
        assert_eq!(view.center, Vec2::new(1.0, 2.0));
        assert_eq!(view.half_extent, Vec2::new(20.0, 10.0));
    }
}
