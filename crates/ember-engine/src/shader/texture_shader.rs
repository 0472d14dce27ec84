use std::cell::Cell;

use crate::coords::UvRect;

use super::{BlendMode, ShaderProgram};

/// Program that samples a texture over a quad.
///
/// The texture-coordinate slot starts at the full image and keeps whatever
/// was last pushed, like a bound uniform. Draws do not read it back.
#[derive(Debug)]
pub struct TextureShader {
    name: &'static str,
    blend: BlendMode,
    tex_coord: Cell<[f32; 8]>,
}

impl TextureShader {
    pub fn new(name: &'static str, blend: BlendMode) -> Self {
        Self {
            name,
            blend,
            tex_coord: Cell::new(UvRect::full().corner_array()),
        }
    }
}

impl ShaderProgram for TextureShader {
    fn name(&self) -> &str {
        self.name
    }

    fn blend_mode(&self) -> BlendMode {
        self.blend
    }

    fn set_texture_coordinate(&self, uv: [f32; 8]) {
        self.tex_coord.set(uv);
    }

    fn texture_coordinate(&self) -> [f32; 8] {
        self.tex_coord.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_full_image() {
        let shader = TextureShader::new("t", BlendMode::Alpha);
        assert_eq!(shader.texture_coordinate(), [1.0, 1.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn keeps_last_pushed_coordinate() {
        let shader = TextureShader::new("t", BlendMode::Alpha);
        let uv = UvRect::new(0.5, 1.0, 0.0, 0.5).corner_array();
        shader.set_texture_coordinate(uv);
        assert_eq!(shader.texture_coordinate(), uv);
    }
}
