use std::ops::Range;

use crate::shader::BlendMode;
use crate::texture::TextureId;

use super::QuadDraw;

/// Run of consecutive draws sharing texture and blend mode.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    pub texture: TextureId,
    pub blend: BlendMode,
    /// Indices into [`DrawList::items`].
    pub range: Range<usize>,
}

/// Draws recorded for one frame, in submission (painter's) order.
///
/// `clear()` keeps allocated capacity, so a list reused across frames stops
/// allocating once warmed.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<QuadDraw>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, draw: QuadDraw) {
        self.items.push(draw);
    }

    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[inline]
    pub fn items(&self) -> &[QuadDraw] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Splits the list into batches without reordering.
    ///
    /// Draws are only merged with their neighbours: a texture that reappears
    /// after another one starts a new batch, so paint order is preserved.
    pub fn batches(&self) -> Vec<Batch> {
        let mut batches: Vec<Batch> = Vec::new();
        for (i, draw) in self.items.iter().enumerate() {
            match batches.last_mut() {
                Some(b) if b.texture == draw.texture && b.blend == draw.blend => {
                    b.range.end = i + 1;
                }
                _ => batches.push(Batch {
                    texture: draw.texture,
                    blend: draw.blend,
                    range: i..i + 1,
                }),
            }
        }
        batches
    }
}
