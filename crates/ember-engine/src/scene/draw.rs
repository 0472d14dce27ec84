use crate::coords::{ColorRgba, Transform};
use crate::shader::BlendMode;
use crate::texture::TextureId;

/// One textured quad as submitted by a renderable.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct QuadDraw {
    pub texture: TextureId,
    pub blend: BlendMode,
    pub transform: Transform,
    pub color: ColorRgba,
    /// UV corner array: top-right, top-left, bottom-right, bottom-left.
    pub uv: [f32; 8],
}
