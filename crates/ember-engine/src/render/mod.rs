//! wgpu backend for recorded quads.
//!
//! [`QuadRenderer`] consumes a camera's draw list and issues one instanced
//! draw per batch, switching pipelines on blend mode and bind groups on
//! texture.
//!
//! Convention:
//! - Instance geometry is in world units; the vertex shader projects through
//!   the camera uniform.
//! - Texture rows are uploaded top first; the vertex shader flips V so UV
//!   `(0, 0)` samples the bottom-left texel.

mod common;
mod ctx;
mod quad;

pub use ctx::{RenderCtx, RenderTarget};
pub use quad::{QuadRenderer, QuadRendererInit};
