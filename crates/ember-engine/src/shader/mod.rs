//! Shader programs as seen by renderables.
//!
//! A program is a shared, named handle carrying the state a renderable pushes
//! before drawing (the texture-coordinate slot) and the blend mode the backend
//! selects a pipeline for. Recorded quads carry their own UVs, so the slot
//! never leaks between renderables sharing a program. The GPU side lives in
//! `render`.

mod registry;
mod texture_shader;

use std::rc::Rc;

pub use registry::ShaderRegistry;
pub use texture_shader::TextureShader;

/// Framebuffer blending used when a program's quads are composited.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum BlendMode {
    /// `src * src_alpha + dst * (1 - src_alpha)`.
    #[default]
    Alpha,
    /// `src + dst`. Overlapping quads brighten; order independent.
    Additive,
}

/// Capability of a shader program that textured quads draw with.
///
/// Programs are shared between renderables and are single-threaded; mutation
/// goes through `&self`.
pub trait ShaderProgram {
    fn name(&self) -> &str;

    fn blend_mode(&self) -> BlendMode;

    /// Replaces the UV corner array used for subsequent draws.
    ///
    /// Order: top-right, top-left, bottom-right, bottom-left, each `(u, v)`.
    fn set_texture_coordinate(&self, uv: [f32; 8]);

    /// Last UV corner array pushed, or the full image if none was.
    fn texture_coordinate(&self) -> [f32; 8];
}

/// Shared handle to a shader program.
pub type ShaderHandle = Rc<dyn ShaderProgram>;

/// Whether two handles refer to the same program instance.
#[inline]
pub fn same_program(a: &ShaderHandle, b: &ShaderHandle) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}
