use crate::camera::Camera;
use crate::coords::{ColorRgba, PixelRegion, Transform, UvRect};
use crate::error::{RenderableError, TextureStateReason};
use crate::shader::{ShaderHandle, ShaderRegistry};
use crate::texture::{TextureId, TextureInfo, TextureInfoStore};

use super::{TextureRenderable, TexturedQuad};

/// A quad showing one element of a sprite sheet.
///
/// The element is a UV sub-rectangle of the texture, defaulting to the whole
/// image. Its pixel-space bounds are kept alongside for per-pixel collision
/// and are recomputed by every region setter.
pub struct SpriteRenderable<B = TextureRenderable> {
    base: B,
    uv: UvRect,
    pixels: PixelRegion,
}

impl SpriteRenderable<TextureRenderable> {
    /// Creates a sprite over the whole of `texture`, drawn with the registry's
    /// sprite shader.
    pub fn new(
        texture: TextureId,
        textures: &TextureInfoStore,
        shaders: &ShaderRegistry,
    ) -> Result<Self, RenderableError> {
        let base = TextureRenderable::new(texture, textures, shaders)?;
        Ok(Self::with_base(base, shaders.sprite_shader()))
    }
}

impl<B: TexturedQuad> SpriteRenderable<B> {
    /// Wraps `base`, switching it to `shader`.
    pub fn with_base(mut base: B, shader: ShaderHandle) -> Self {
        base.set_shader(shader);
        let info = base.texture_info();
        let uv = UvRect::full();
        Self {
            base,
            uv,
            pixels: PixelRegion::from_uv(uv, info.width, info.height),
        }
    }

    /// Sets the element bounds in UV space.
    ///
    /// Bounds are stored as given; inverted or out-of-range values are the
    /// caller's responsibility.
    pub fn set_region_by_uv(&mut self, left: f32, right: f32, bottom: f32, top: f32) {
        self.set_region(UvRect::new(left, right, bottom, top));
    }

    /// Sets the element bounds in pixels of the texture, bottom-left origin.
    ///
    /// Fails if the texture has a zero width or height; the sprite is left
    /// unchanged in that case.
    pub fn set_region_by_pixels(
        &mut self,
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
    ) -> Result<(), RenderableError> {
        let info = self.base.texture_info();
        if !info.has_area() {
            let TextureInfo { width, height } = info;
            return Err(RenderableError::InvalidTextureState {
                texture: self.base.texture(),
                reason: TextureStateReason::ZeroDimensions { width, height },
            });
        }
        self.set_region(UvRect::from_pixels(left, right, bottom, top, info.width, info.height));
        Ok(())
    }

    fn set_region(&mut self, uv: UvRect) {
        let info = self.base.texture_info();
        self.uv = uv;
        self.pixels = PixelRegion::from_uv(uv, info.width, info.height);
    }

    /// Corner UVs in shader order: top-right, top-left, bottom-right, bottom-left.
    #[inline]
    pub fn uv_corner_array(&self) -> [f32; 8] {
        self.uv.corner_array()
    }

    #[inline]
    pub fn uv_rect(&self) -> UvRect {
        self.uv
    }

    #[inline]
    pub fn pixel_region(&self) -> PixelRegion {
        self.pixels
    }

    #[inline]
    pub fn left_pixel_index(&self) -> f32 {
        self.pixels.left_index
    }

    #[inline]
    pub fn bottom_pixel_index(&self) -> f32 {
        self.pixels.bottom_index
    }

    #[inline]
    pub fn width_pixels(&self) -> f32 {
        self.pixels.width
    }

    #[inline]
    pub fn height_pixels(&self) -> f32 {
        self.pixels.height
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

impl<B: TexturedQuad> TexturedQuad for SpriteRenderable<B> {
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

    /// Pushes the element's UVs into the shader, then draws the base quad
    /// over that element.
    fn draw(&self, camera: &mut Camera) {
        let uv = self.uv_corner_array();
        self.base.shader().set_texture_coordinate(uv);
        self.base.draw_with_uv(camera, uv);
    }

    fn draw_with_uv(&self, camera: &mut Camera, uv: [f32; 8]) {
        self.base.draw_with_uv(camera, uv);
    }
}
