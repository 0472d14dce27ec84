//! Texture handles, pixel-size metadata and GPU texture storage.
//!
//! `TextureInfoStore` is the CPU-side registry renderables read at
//! construction. `TextureStore` owns the wgpu textures and fills the registry
//! as images are uploaded.

mod info;
mod store;

pub use info::{TextureId, TextureInfo, TextureInfoStore};
pub use store::TextureStore;
