use std::collections::HashMap;
use std::fmt;

/// Opaque handle to a texture registered in a [`TextureInfoStore`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TextureId(pub(crate) u32);

impl TextureId {
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TextureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "texture#{}", self.0)
    }
}

/// Image dimensions in pixels.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct TextureInfo {
    pub width: u32,
    pub height: u32,
}

impl TextureInfo {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn has_area(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Registry of texture dimensions keyed by [`TextureId`].
///
/// Ids are issued sequentially by [`register`](Self::register) and never reused.
#[derive(Debug, Default)]
pub struct TextureInfoStore {
    infos: HashMap<TextureId, TextureInfo>,
    next_id: u32,
}

impl TextureInfoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the dimensions of a newly loaded texture and returns its id.
    pub fn register(&mut self, info: TextureInfo) -> TextureId {
        let id = TextureId(self.next_id);
        self.next_id += 1;
        self.infos.insert(id, info);
        log::debug!("registered {id} ({}x{})", info.width, info.height);
        id
    }

    /// Returns the dimensions of `id`, if it has been registered.
    pub fn get(&self, id: TextureId) -> Option<TextureInfo> {
        self.infos.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.infos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.infos.is_empty()
    }
}
