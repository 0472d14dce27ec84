//! Coordinate and geometry types shared by renderables, camera and backend.
//!
//! Spaces:
//! - World units: origin at the camera center, +X right, +Y up.
//! - Texture UV: normalized `[0, 1]`, `(0, 0)` bottom-left of the image.
//! - Texture pixels: `[0, width] x [0, height]`, bottom-left origin like UV.

mod color;
mod transform;
mod uv;
mod vec2;
mod viewport;

pub use color::ColorRgba;
pub use transform::Transform;
pub use uv::{PixelRegion, UvRect};
pub use vec2::Vec2;
pub use viewport::Viewport;
