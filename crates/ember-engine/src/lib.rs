//! Ember engine crate.
//!
//! Sprite and particle renderables over a textured-quad model, plus the wgpu
//! backend that draws them.
//!
//! Typical frame:
//! 1. renderables call [`TexturedQuad::draw`](renderable::TexturedQuad::draw)
//!    with the [`Camera`](camera::Camera), recording quads;
//! 2. [`QuadRenderer`](render::QuadRenderer) renders the camera's draw list;
//! 3. the camera is cleared for the next frame.

pub mod camera;
pub mod coords;
pub mod error;
pub mod logging;
pub mod render;
pub mod renderable;
pub mod scene;
pub mod shader;
pub mod texture;

pub use error::{RenderableError, TextureStateReason};
