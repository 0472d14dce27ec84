use crate::camera::Camera;
use crate::coords::{ColorRgba, Transform, UvRect};
use crate::error::{RenderableError, TextureStateReason};
use crate::scene::QuadDraw;
use crate::shader::{ShaderHandle, ShaderRegistry};
use crate::texture::{TextureId, TextureInfo, TextureInfoStore};

use super::TexturedQuad;

/// A quad showing a whole texture.
///
/// The texture's dimensions are captured at construction; the texture must
/// already be registered in the store. Plain draws always sample the full
/// image, whatever state the shared shader program holds.
pub struct TextureRenderable {
    texture: TextureId,
    info: TextureInfo,
    shader: ShaderHandle,
    transform: Transform,
    color: ColorRgba,
}

impl TextureRenderable {
    /// Creates a renderable drawing `texture` with the registry's texture shader.
    ///
    /// Fails with [`RenderableError::InvalidTextureState`] if `texture` has no
    /// entry in `textures`.
    pub fn new(
        texture: TextureId,
        textures: &TextureInfoStore,
        shaders: &ShaderRegistry,
    ) -> Result<Self, RenderableError> {
        let info = textures.get(texture).ok_or(RenderableError::InvalidTextureState {
            texture,
            reason: TextureStateReason::Unbound,
        })?;
        Ok(Self {
            texture,
            info,
            shader: shaders.texture_shader(),
            transform: Transform::default(),
            color: ColorRgba::white(),
        })
    }
}

impl TexturedQuad for TextureRenderable {
    fn texture(&self) -> TextureId {
        self.texture
    }

    fn texture_info(&self) -> TextureInfo {
        self.info
    }

    fn shader(&self) -> &ShaderHandle {
        &self.shader
    }

    fn set_shader(&mut self, shader: ShaderHandle) {
        self.shader = shader;
    }

    fn transform(&self) -> &Transform {
        &self.transform
    }

    fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    fn color(&self) -> ColorRgba {
        self.color
    }

    fn set_color(&mut self, color: ColorRgba) {
        self.color = color;
    }

    fn draw(&self, camera: &mut Camera) {
        self.draw_with_uv(camera, UvRect::full().corner_array());
    }

    fn draw_with_uv(&self, camera: &mut Camera, uv: [f32; 8]) {
        log::trace!("draw {} with shader '{}'", self.texture, self.shader.name());
        camera.submit(QuadDraw {
            texture: self.texture,
            blend: self.shader.blend_mode(),
            transform: self.transform,
            color: self.color,
            uv,
        });
    }
}
