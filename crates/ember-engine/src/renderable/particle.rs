use crate::camera::Camera;
use crate::coords::{ColorRgba, Transform};
use crate::error::RenderableError;
use crate::shader::{ShaderHandle, ShaderRegistry};
use crate::texture::{TextureId, TextureInfo, TextureInfoStore};

use super::{TextureRenderable, TexturedQuad};

/// A textured quad composited with additive blending.
///
/// Behaves exactly like its base apart from the shader chosen at
/// construction.
pub struct ParticleRenderable<B = TextureRenderable> {
    base: B,
}

impl ParticleRenderable<TextureRenderable> {
    pub fn new(
        texture: TextureId,
        textures: &TextureInfoStore,
        shaders: &ShaderRegistry,
    ) -> Result<Self, RenderableError> {
        let base = TextureRenderable::new(texture, textures, shaders)?;
        Ok(Self::with_base(base, shaders.particle_shader()))
    }
}

impl<B: TexturedQuad> ParticleRenderable<B> {
    pub fn with_base(mut base: B, shader: ShaderHandle) -> Self {
        base.set_shader(shader);
        Self { base }
    }

    #[inline]
    pub fn base(&self) -> &B {
        &self.base
    }

    #[inline]
    pub fn base_mut(&mut self) -> &mut B {
        &mut self.base
    }
}

impl<B: TexturedQuad> TexturedQuad for ParticleRenderable<B> {
    fn texture(&self) -> TextureId {
        self.base.texture()
    }

    fn texture_info(&self) -> TextureInfo {
        self.base.texture_info()
    }

    fn shader(&self) -> &ShaderHandle {
        self.base.shader()
    }

    fn set_shader(&mut self, shader: ShaderHandle) {
        self.base.set_shader(shader);
    }

    fn transform(&self) -> &Transform {
        self.base.transform()
    }

    fn transform_mut(&mut self) -> &mut Transform {
        self.base.transform_mut()
    }

    fn color(&self) -> ColorRgba {
        self.base.color()
    }

    fn set_color(&mut self, color: ColorRgba) {
        self.base.set_color(color);
    }

    fn draw(&self, camera: &mut Camera) {
        self.base.draw(camera);
    }

    fn draw_with_uv(&self, camera: &mut Camera, uv: [f32; 8]) {
        self.base.draw_with_uv(camera, uv);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{UvRect, Vec2, Viewport};
    use crate::renderable::SpriteRenderable;
    use crate::shader::{same_program, BlendMode};

    fn setup() -> (TextureInfoStore, TextureId, ShaderRegistry) {
        let mut textures = TextureInfoStore::new();
        let id = textures.register(TextureInfo::new(16, 16));
        (textures, id, ShaderRegistry::new())
    }

    #[test]
    fn selects_particle_shader() {
        let (textures, id, shaders) = setup();
        let p = ParticleRenderable::new(id, &textures, &shaders).unwrap();
        assert!(same_program(p.shader(), &shaders.particle_shader()));
    }

    #[test]
    fn shader_differs_from_sprite_on_same_texture() {
        let (textures, id, shaders) = setup();
        let p = ParticleRenderable::new(id, &textures, &shaders).unwrap();
        let s = SpriteRenderable::new(id, &textures, &shaders).unwrap();
        assert!(!same_program(p.shader(), s.shader()));
    }

    #[test]
    fn draws_whole_texture_additively() {
        let (textures, id, shaders) = setup();
        let mut p = ParticleRenderable::new(id, &textures, &shaders).unwrap();
        p.transform_mut().set_size(2.0, 2.0);

        let mut cam = Camera::new(Vec2::zero(), 50.0, Viewport::new(100.0, 100.0));
        p.draw(&mut cam);

        let draw = cam.draw_list().items()[0];
        assert_eq!(draw.blend, BlendMode::Additive);
        assert_eq!(draw.uv, [1.0, 1.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0]);
        assert_eq!(draw.transform.size, Vec2::new(2.0, 2.0));
    }

    #[test]
    fn sprite_on_particle_program_does_not_leak_region() {
        let (textures, id, shaders) = setup();
        let mut spark = SpriteRenderable::new(id, &textures, &shaders).unwrap();
        spark.set_shader(shaders.particle_shader());
        spark.set_region_by_uv(0.0, 0.25, 0.0, 0.25);
        let p = ParticleRenderable::new(id, &textures, &shaders).unwrap();

        let mut cam = Camera::new(Vec2::zero(), 50.0, Viewport::new(100.0, 100.0));
        spark.draw(&mut cam);
        p.draw(&mut cam);

        let items = cam.draw_list().items();
        assert_eq!(items[0].uv, [0.25, 0.25, 0.0, 0.25, 0.25, 0.0, 0.0, 0.0]);
        assert_eq!(items[1].uv, UvRect::full().corner_array());
        assert_eq!(items[1].blend, BlendMode::Additive);
    }
}
