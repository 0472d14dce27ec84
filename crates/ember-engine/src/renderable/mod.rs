//! Textured-quad renderables.
//!
//! [`TextureRenderable`] is the base: a texture, a shader handle, a transform
//! and a tint. [`SpriteRenderable`] and [`ParticleRenderable`] wrap a base
//! through the [`TexturedQuad`] capability rather than inheriting from it, so
//! either can be driven by a substitute base in tests.

mod particle;
mod sprite;
mod tex_coord;
mod texture;

pub use particle::ParticleRenderable;
pub use sprite::SpriteRenderable;
pub use tex_coord::TexCoordIndex;
pub use texture::TextureRenderable;

use crate::camera::Camera;
use crate::coords::{ColorRgba, Transform};
use crate::shader::ShaderHandle;
use crate::texture::{TextureId, TextureInfo};

/// What a leaf renderable needs from its base.
pub trait TexturedQuad {
    /// Texture bound when this quad is drawn.
    fn texture(&self) -> TextureId;

    /// Pixel dimensions of [`texture`](Self::texture).
    fn texture_info(&self) -> TextureInfo;

    fn shader(&self) -> &ShaderHandle;

    fn set_shader(&mut self, shader: ShaderHandle);

    fn transform(&self) -> &Transform;

    fn transform_mut(&mut self) -> &mut Transform;

    fn color(&self) -> ColorRgba;

    fn set_color(&mut self, color: ColorRgba);

    /// Submits the quad to `camera`.
    fn draw(&self, camera: &mut Camera);

    /// Submits the quad sampling the texture through `uv`, a corner array in
    /// top-right, top-left, bottom-right, bottom-left order.
    fn draw_with_uv(&self, camera: &mut Camera, uv: [f32; 8]);
}
