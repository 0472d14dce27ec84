/// Sub-rectangle of a texture in normalized UV space.
///
/// `(0, 0)` is the bottom-left of the image, `(1, 1)` the top-right.
/// `left <= right` and `bottom <= top` are expected but not enforced; inverted
/// rectangles simply produce mirrored sampling.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct UvRect {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl UvRect {
    #[inline]
    pub const fn new(left: f32, right: f32, bottom: f32, top: f32) -> Self {
        Self { left, right, bottom, top }
    }

    /// The whole image.
    #[inline]
    pub const fn full() -> Self {
        Self::new(0.0, 1.0, 0.0, 1.0)
    }

    /// Converts pixel bounds to UV by dividing by the image size.
    ///
    /// Both dimensions must be non-zero; callers check the texture's area first.
    pub fn from_pixels(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        image_width: u32,
        image_height: u32,
    ) -> Self {
        debug_assert!(image_width > 0 && image_height > 0);
        let w = image_width as f32;
        let h = image_height as f32;
        Self::new(left / w, right / w, bottom / h, top / h)
    }

    /// Flat `(u, v)` corner array consumed by the quad shader.
    ///
    /// Order: top-right, top-left, bottom-right, bottom-left. The vertex stage
    /// indexes this array by corner, so the order must not change.
    #[inline]
    pub fn corner_array(self) -> [f32; 8] {
        [
            self.right, self.top,    // top-right
            self.left,  self.top,    // top-left
            self.right, self.bottom, // bottom-right
            self.left,  self.bottom, // bottom-left
        ]
    }
}

impl Default for UvRect {
    fn default() -> Self {
        Self::full()
    }
}

/// Pixel-space bounds of a UV region, as sampled by per-pixel collision.
///
/// `width` and `height` count pixels inclusively (both edges), hence the `+ 1`.
/// Values are not rounded.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct PixelRegion {
    pub left_index: f32,
    pub bottom_index: f32,
    pub width: f32,
    pub height: f32,
}

impl PixelRegion {
    pub fn from_uv(uv: UvRect, image_width: u32, image_height: u32) -> Self {
        let w = image_width as f32;
        let h = image_height as f32;
        Self {
            left_index: uv.left * w,
            bottom_index: uv.bottom * h,
            width: (uv.right - uv.left) * w + 1.0,
            height: (uv.top - uv.bottom) * h + 1.0,
        }
    }
}
