//! Recorded draw stream.
//!
//! Renderables submit [`QuadDraw`]s into the camera's [`DrawList`] during
//! `draw`; the backend consumes the list afterwards. Nothing here touches the
//! GPU.

mod draw;
mod list;

pub use draw::QuadDraw;
pub use list::{Batch, DrawList};
