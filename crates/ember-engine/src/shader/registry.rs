use std::rc::Rc;

use super::{BlendMode, ShaderHandle, TextureShader};

/// Shared programs for the built-in renderables.
///
/// Constructed once and injected into renderable constructors, so tests can
/// build their own registry instead of reaching for a global.
pub struct ShaderRegistry {
    texture: ShaderHandle,
    sprite: ShaderHandle,
    particle: ShaderHandle,
}

impl ShaderRegistry {
    pub fn new() -> Self {
        log::debug!("creating built-in shader programs");
        Self {
            texture: Rc::new(TextureShader::new("texture", BlendMode::Alpha)),
            sprite: Rc::new(TextureShader::new("sprite", BlendMode::Alpha)),
            particle: Rc::new(TextureShader::new("particle", BlendMode::Additive)),
        }
    }

    /// Builds a registry from caller-supplied programs.
    pub fn with_programs(texture: ShaderHandle, sprite: ShaderHandle, particle: ShaderHandle) -> Self {
        Self { texture, sprite, particle }
    }

    /// Full-image textured quads.
    pub fn texture_shader(&self) -> ShaderHandle {
        Rc::clone(&self.texture)
    }

    /// Atlas sub-region quads.
    pub fn sprite_shader(&self) -> ShaderHandle {
        Rc::clone(&self.sprite)
    }

    /// Additive-blended particle quads.
    pub fn particle_shader(&self) -> ShaderHandle {
        Rc::clone(&self.particle)
    }
}

impl Default for ShaderRegistry {
    fn default() -> Self {
        Self::new()
    }
}
