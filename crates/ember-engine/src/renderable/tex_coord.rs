/// Positions of the region bounds inside a UV corner array.
///
/// The array is `[right, top, left, top, right, bottom, left, bottom]`, so each
/// bound has a first occurrence; these are the indices of those.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TexCoordIndex {
    Right = 0,
    Top = 1,
    Left = 2,
    Bottom = 5,
}

impl TexCoordIndex {
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Reads this bound out of a corner array.
    #[inline]
    pub fn read(self, uv: &[f32; 8]) -> f32 {
        uv[self.index()]
    }
}
