use super::Vec2;

/// Placement of a quad in world space.
///
/// `position` is the quad center. Rotation is counter-clockwise in radians
/// about the center.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub position: Vec2,
    pub size: Vec2,
    pub rotation: f32,
}

impl Transform {
    #[inline]
    pub const fn new(position: Vec2, size: Vec2, rotation: f32) -> Self {
        Self { position, size, rotation }
    }

    #[inline]
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.position = Vec2::new(x, y);
    }

    #[inline]
    pub fn set_size(&mut self, width: f32, height: f32) {
        self.size = Vec2::new(width, height);
    }

    #[inline]
    pub fn translate(&mut self, delta: Vec2) {
        self.position = self.position + delta;
    }

    #[inline]
    pub fn rotate_by(&mut self, radians: f32) {
        self.rotation += radians;
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new(Vec2::zero(), Vec2::splat(1.0), 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_moves_center() {
        let mut t = Transform::new(Vec2::new(10.0, 5.0), Vec2::new(4.0, 2.0), 0.0);
        t.translate(Vec2::new(-2.0, 1.0));
        assert_eq!(t.position, Vec2::new(8.0, 6.0));
        assert_eq!(t.size, Vec2::new(4.0, 2.0));
    }

    #[test]
    fn rotate_by_accumulates() {
        let mut t = Transform::default();
        t.rotate_by(0.25);
        t.rotate_by(0.5);
        assert!((t.rotation - 0.75).abs() < 1e-6);
    }
}
